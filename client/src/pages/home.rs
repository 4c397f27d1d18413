//! Landing route. Staking content is mounted here by the vault pages.

use leptos::prelude::*;

use crate::components::document_head::{DocumentHead, use_site_config};

#[component]
pub fn HomePage() -> impl IntoView {
    let site = use_site_config();

    view! {
        <DocumentHead/>
        <section class="home">
            <h1 class="home__title">{site.site_name}</h1>
            <p class="home__tagline">{site.description}</p>
        </section>
    }
}
