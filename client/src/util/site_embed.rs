//! Site configuration carried from the server render into the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server reads `SiteConfig` from its environment and provides it as
//! context while rendering. The hydrated app has no such context, so the
//! document shell serializes the same config into a
//! `<script type="application/json">` element and the client reads it back
//! before falling back to the built-in defaults.

#[cfg(test)]
#[path = "site_embed_test.rs"]
mod site_embed_test;

use crate::metadata::SiteConfig;
use crate::util::no_flash::script_safe;

/// `id` of the element holding the serialized config.
pub const SITE_CONFIG_ELEMENT_ID: &str = "hodl-site-config";

/// Serialize `site` for inlining in a JSON script element.
///
/// # Errors
///
/// Returns the serializer error; `SiteConfig` has no fields that can fail in
/// practice.
pub fn encode(site: &SiteConfig) -> Result<String, serde_json::Error> {
    serde_json::to_string(site).map(|json| script_safe(&json))
}

/// # Errors
///
/// Returns the parse error for anything that is not a serialized `SiteConfig`.
pub fn decode(raw: &str) -> Result<SiteConfig, serde_json::Error> {
    serde_json::from_str(raw)
}

/// The config embedded by the server, when running in a browser document
/// that carries one.
pub fn read_embedded() -> Option<SiteConfig> {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()?
            .document()?
            .get_element_by_id(SITE_CONFIG_ELEMENT_ID)?
            .text_content()?;
        match decode(&raw) {
            Ok(site) => Some(site),
            Err(err) => {
                log::warn!("embedded site config unreadable, using defaults: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
