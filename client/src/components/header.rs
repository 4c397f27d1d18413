//! Persistent site header.

use leptos::prelude::*;

use crate::components::document_head::use_site_config;
use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn Header() -> impl IntoView {
    let site = use_site_config();

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">{site.site_name}</a>
            <span class="site-header__spacer"></span>
            <ThemeToggle/>
        </header>
    }
}
