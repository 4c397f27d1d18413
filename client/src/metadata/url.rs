//! Minimal URL helpers for canonical and share-image links.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

use super::MetadataError;

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Validate an absolute http(s) base URL and strip trailing slashes.
///
/// # Errors
///
/// Returns [`MetadataError::InvalidBaseUrl`] when the scheme is missing, the
/// host is empty, or the value carries whitespace, a query or a fragment.
pub fn normalize_base_url(raw: &str) -> Result<String, MetadataError> {
    let trimmed = raw.trim();
    let invalid = || MetadataError::InvalidBaseUrl(raw.to_owned());

    let (scheme, rest) = SCHEMES
        .iter()
        .find_map(|scheme| trimmed.strip_prefix(scheme).map(|rest| (*scheme, rest)))
        .ok_or_else(invalid)?;

    let host = rest.split('/').next().unwrap_or_default();
    if host.is_empty() || rest.chars().any(|c| c.is_whitespace() || c == '?' || c == '#') {
        return Err(invalid());
    }

    Ok(format!("{scheme}{}", rest.trim_end_matches('/')))
}

#[must_use]
pub fn is_absolute(url: &str) -> bool {
    SCHEMES.iter().any(|scheme| {
        url.strip_prefix(scheme)
            .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('/'))
    })
}

/// Base-relative references start with a single `/`.
#[must_use]
pub fn is_base_relative(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//")
}

/// Join a normalized base URL and a path. Absolute `path` values pass through.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    if is_absolute(path) {
        return path.to_owned();
    }
    let path = path.trim();
    if path.starts_with('/') { format!("{base}{path}") } else { format!("{base}/{path}") }
}
