//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single Axum router serves the Leptos SSR shell for every app route,
//! the compiled WASM/CSS bundle under `/pkg`, and the public assets (icons,
//! share image) from the site root. `robots.txt` and `healthz` are plain
//! handlers outside Leptos.

pub mod robots;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use hodl_client::metadata::SiteConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Leptos SSR app plus static assets.
///
/// The validated [`SiteConfig`] is provided as context to every render so
/// metadata and the shell use the deployment's base URL and branding.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(hodl_client::app::App);

    let site = config.site.clone();
    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let site = site.clone();
                move || provide_context(site.clone())
            },
            {
                let opts = leptos_options.clone();
                let site = site.clone();
                move || hodl_client::app::shell(opts.clone(), site.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let robots_body = robots::robots_txt(&site);

    Ok(Router::new()
        .route("/robots.txt", get(move || std::future::ready(robots::robots_response(robots_body.clone()))))
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
