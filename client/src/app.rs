//! Document shell and root application component.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::document_head::use_site_config;
use crate::components::shell::{Shell, ShellComposer};
use crate::components::theme_provider::ThemeProvider;
use crate::metadata::SiteConfig;
use crate::pages::{home::HomePage, not_found::NotFoundPage};
use crate::state::theme::{ThemeOptions, ThemePreference};
use crate::util::no_flash::bootstrap_script;
use crate::util::site_embed::{self, SITE_CONFIG_ELEMENT_ID};

/// Theme options shared by the server document and the hydrated app.
pub fn theme_options() -> ThemeOptions {
    ThemeOptions::default()
}

/// HTML document rendered on the server for SSR + hydration.
///
/// `<html>` sits outside the hydrated tree: its theme attribute carries the
/// provisional mode here and is rewritten by the bootstrap script before
/// first paint, so the two renders may disagree without a hydration error.
/// `site` is also embedded as JSON so the hydrated app sees the same config.
pub fn shell(options: LeptosOptions, site: SiteConfig) -> impl IntoView {
    let theme = theme_options();
    let root = ShellComposer::from_site(&site, &theme).root(ThemePreference::provisional(theme.default_mode).resolved);
    let bootstrap = bootstrap_script(&theme);
    let font_css = site.font.root_css();
    let font_href = site.font.stylesheet_href();
    let site_json = site_embed::encode(&site).unwrap_or_else(|err| {
        log::error!("failed to embed site config: {err}");
        String::new()
    });

    view! {
        <!DOCTYPE html>
        <html lang=root.lang.clone() class=root.theme_class().unwrap_or_default() data-theme=root.data_theme()>
            <head>
                <meta charset="utf-8"/>
                <script inner_html=bootstrap></script>
                <link rel="preconnect" href="https://fonts.googleapis.com"/>
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin=""/>
                <link rel="stylesheet" href=font_href/>
                <style inner_html=font_css></style>
                <script type="application/json" id=SITE_CONFIG_ELEMENT_ID inner_html=site_json></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="antialiased">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the site configuration and theme contexts, then mounts the
/// routes inside the shell's content slot.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(use_site_config());

    view! {
        <Stylesheet id="leptos" href="/pkg/hodl-web.css"/>

        <ThemeProvider options=theme_options()>
            <Router>
                <Shell>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                    </Routes>
                </Shell>
            </Router>
        </ThemeProvider>
    }
}
