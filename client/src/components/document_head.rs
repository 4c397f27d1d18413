//! Emit a page's metadata into the document head via `leptos_meta`.

#[cfg(test)]
#[path = "document_head_test.rs"]
mod document_head_test;

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::hooks::use_location;

use crate::metadata::{HeadTag, MetadataDescriptor, PageMetadata, SiteConfig, head_tags};
use crate::util::site_embed;

/// Site configuration from context, then the copy the server embedded in the
/// document, then the built-in production defaults.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().or_else(site_embed::read_embedded).unwrap_or_default()
}

/// Put the routed `pathname` under `scopes` so the canonical URL follows the
/// current route unless a scope names its own path.
pub fn scopes_for_path(pathname: &str, scopes: Vec<PageMetadata>) -> Vec<PageMetadata> {
    let mut layered = Vec::with_capacity(scopes.len() + 1);
    layered.push(PageMetadata::new().with_path(pathname));
    layered.extend(scopes);
    layered
}

fn render_tag(tag: HeadTag) -> AnyView {
    match tag {
        HeadTag::Title(text) => view! { <Title text=text/> }.into_any(),
        HeadTag::MetaName { name, content } => view! { <Meta name=name content=content/> }.into_any(),
        HeadTag::MetaProperty { property, content } => {
            view! { <Meta property=property content=content/> }.into_any()
        }
        HeadTag::Link { rel, href } => view! { <Link rel=rel href=href/> }.into_any(),
    }
}

/// Head elements for the current page. `scopes` are nested overrides,
/// outermost first. Unusable page values fall back field by field inside
/// `MetadataDescriptor::resolve`; only a broken site config renders nothing.
#[component]
pub fn DocumentHead(#[prop(optional)] scopes: Vec<PageMetadata>) -> impl IntoView {
    let site = use_site_config();
    let pathname = use_location().pathname.get_untracked();
    let scopes = scopes_for_path(&pathname, scopes);

    match MetadataDescriptor::resolve(&site, &scopes) {
        Ok(descriptor) => head_tags(&descriptor).into_iter().map(render_tag).collect_view().into_any(),
        Err(err) => {
            log::error!("site metadata invalid: {err}");
            ().into_any()
        }
    }
}
