//! Page shell: header, content slot, footer under the themed document root.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ShellComposer` computes what the document root carries (language and
//! theme indicator) and which regions surround the content. The `Shell`
//! component renders that layout; the root attributes are written by
//! `app::shell` on the server and by the head bootstrap script and
//! `BrowserRoot` in the browser.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::metadata::SiteConfig;
use crate::state::theme::{ResolvedTheme, ThemeAttribute, ThemeOptions};

/// Outer wrapper: vertical flex, full viewport height, clipped horizontal overflow.
pub const SHELL_CLASS: &str = "relative flex min-h-screen flex-col overflow-x-hidden";

/// Content slot: grows into the remaining height.
pub const CONTENT_CLASS: &str = "flex-1 w-full";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellRegion {
    Header,
    Content,
    Footer,
}

/// Attributes carried by `<html>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootAttributes {
    pub lang: String,
    pub theme: ResolvedTheme,
    pub attribute: ThemeAttribute,
}

impl RootAttributes {
    /// `class` value when the theme is exposed as a class.
    #[must_use]
    pub fn theme_class(&self) -> Option<&'static str> {
        (self.attribute == ThemeAttribute::Class).then(|| self.theme.as_str())
    }

    /// `data-theme` value when the theme is exposed as a data attribute.
    #[must_use]
    pub fn data_theme(&self) -> Option<&'static str> {
        (self.attribute == ThemeAttribute::DataTheme).then(|| self.theme.as_str())
    }

    /// Attribute name/value pairs in render order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![("lang", self.lang.clone()), (self.attribute.name(), self.theme.as_str().to_owned())]
    }
}

/// A composed document: root attributes plus the region layout around `content`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellDocument<C> {
    pub root: RootAttributes,
    pub content: C,
}

impl<C> ShellDocument<C> {
    /// Regions in render order. Header and footer are fixed.
    #[must_use]
    pub fn regions(&self) -> [ShellRegion; 3] {
        [ShellRegion::Header, ShellRegion::Content, ShellRegion::Footer]
    }

    /// Swap the content slot, keeping root and fixed regions.
    pub fn navigate<D>(self, content: D) -> ShellDocument<D> {
        ShellDocument { root: self.root, content }
    }

    /// Follow a resolved-mode change.
    pub fn retheme(&mut self, theme: ResolvedTheme) {
        self.root.theme = theme;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellComposer {
    lang: String,
    attribute: ThemeAttribute,
}

impl ShellComposer {
    pub fn new(lang: impl Into<String>, attribute: ThemeAttribute) -> Self {
        Self { lang: lang.into(), attribute }
    }

    #[must_use]
    pub fn from_site(site: &SiteConfig, options: &ThemeOptions) -> Self {
        Self::new(site.lang.clone(), options.attribute)
    }

    #[must_use]
    pub fn root(&self, theme: ResolvedTheme) -> RootAttributes {
        RootAttributes { lang: self.lang.clone(), theme, attribute: self.attribute }
    }

    pub fn render<C>(&self, theme: ResolvedTheme, content: C) -> ShellDocument<C> {
        ShellDocument { root: self.root(theme), content }
    }
}

/// Header → content slot → footer.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class=SHELL_CLASS>
            <Header/>
            <main class=CONTENT_CLASS>{children()}</main>
            <Footer/>
        </div>
    }
}
