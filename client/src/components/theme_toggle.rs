//! Header button cycling light → dark → system.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::components::theme_provider::use_theme;
use crate::state::theme::{ResolvedTheme, ThemeMode};

#[must_use]
pub fn next_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::Light => ThemeMode::Dark,
        ThemeMode::Dark => ThemeMode::System,
        ThemeMode::System => ThemeMode::Light,
    }
}

#[must_use]
pub fn toggle_icon(chosen: ThemeMode, resolved: ResolvedTheme) -> &'static str {
    match (chosen, resolved) {
        (ThemeMode::System, _) => "◐",
        (_, ResolvedTheme::Dark) => "☾",
        (_, ResolvedTheme::Light) => "☀",
    }
}

#[must_use]
pub fn toggle_title(chosen: ThemeMode) -> String {
    format!("Theme: {chosen} (switch to {})", next_mode(chosen))
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| theme.set_mode(next_mode(theme.chosen()))
            title=move || toggle_title(theme.chosen())
            aria-label=move || toggle_title(theme.chosen())
        >
            {move || {
                let preference = theme.preference();
                toggle_icon(preference.chosen, preference.resolved)
            }}
        </button>
    }
}
