//! `/robots.txt` derived from the site-wide crawler directives.

#[cfg(test)]
#[path = "robots_test.rs"]
mod robots_test;

use axum::http::header;
use axum::response::IntoResponse;
use hodl_client::metadata::SiteConfig;

/// Render robots.txt. Crawlers are allowed everywhere unless the site is
/// configured as non-indexable, in which case they are kept out entirely.
#[must_use]
pub fn robots_txt(site: &SiteConfig) -> String {
    let rule = if site.robots.index { "Allow: /" } else { "Disallow: /" };
    format!("User-agent: *\n{rule}\n")
}

pub fn robots_response(body: String) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}
