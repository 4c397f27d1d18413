//! Fallback route for unknown paths.

use leptos::prelude::*;

use crate::components::document_head::DocumentHead;
use crate::metadata::{PageMetadata, Robots};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let scopes = vec![
        PageMetadata::new()
            .with_title("Page not found | hodlCoin")
            .with_robots(Robots::restricted()),
    ];

    view! {
        <DocumentHead scopes=scopes/>
        <section class="not-found">
            <h1>"Page not found."</h1>
            <a href="/">"Back to vaults"</a>
        </section>
    }
}
