//! Theme context for the component tree.
//!
//! DESIGN
//! ======
//! `ThemeContext` holds only signals so it can live in Leptos context. The
//! browser session (resolver, storage, media query listener) is owned by an
//! effect, which never runs during SSR; the first hydration pass therefore
//! renders the same provisional preference as the server, and the effect then
//! reconciles to the personalized one.

use leptos::prelude::*;

use crate::state::theme::{ResolvedTheme, ThemeMode, ThemeOptions, ThemePreference, ThemeResolver};
use crate::state::theme_session::ThemeSession;
use crate::util::color_scheme::{BrowserRoot, MediaQuerySignal};
use crate::util::preference_store::BrowserStore;

type BrowserSession = ThemeSession<BrowserStore, MediaQuerySignal>;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    preference: RwSignal<ThemePreference>,
    requested: RwSignal<Option<ThemeMode>>,
}

impl ThemeContext {
    #[must_use]
    pub fn provisional(options: &ThemeOptions) -> Self {
        Self {
            preference: RwSignal::new(ThemePreference::provisional(options.default_mode)),
            requested: RwSignal::new(None),
        }
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference.get()
    }

    #[must_use]
    pub fn chosen(&self) -> ThemeMode {
        self.preference.get().chosen
    }

    #[must_use]
    pub fn resolved(&self) -> ResolvedTheme {
        self.preference.get().resolved
    }

    /// Request a mode change; the browser session persists and applies it.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.requested.set(Some(mode));
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn start_browser_session(options: ThemeOptions, theme: ThemeContext) -> BrowserSession {
    let root = BrowserRoot::new(options.attribute);
    let store = BrowserStore::new(options.storage_key.clone());
    let resolver = ThemeResolver::new(options, store, MediaQuerySignal::new());
    ThemeSession::start(resolver, root, move |preference| theme.preference.set(preference))
}

/// Provide [`ThemeContext`] to `children` and drive the browser session.
#[component]
pub fn ThemeProvider(#[prop(optional)] options: Option<ThemeOptions>, children: Children) -> impl IntoView {
    let options = options.unwrap_or_default();
    let theme = ThemeContext::provisional(&options);
    provide_context(theme);

    Effect::new(move |session: Option<BrowserSession>| {
        let session = session.unwrap_or_else(|| start_browser_session(options.clone(), theme));
        if let Some(mode) = theme.requested.get() {
            session.set_mode(mode);
        }
        session
    });

    children()
}
