//! Persistent site footer.

use leptos::prelude::*;

use crate::components::document_head::use_site_config;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site_config();
    let handle = site.twitter_site.trim_start_matches('@').to_owned();

    view! {
        <footer class="site-footer">
            <span class="site-footer__publisher">{site.publisher}</span>
            <a class="site-footer__social" href=format!("https://x.com/{handle}") rel="noopener noreferrer">
                {site.twitter_site}
            </a>
        </footer>
    }
}
