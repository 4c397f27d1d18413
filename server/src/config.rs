//! Server configuration parsed from environment variables.
//!
//! Every value has a production default; the environment only overrides.
//! Parsing goes through a lookup function so tests can supply a map instead
//! of mutating the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use hodl_client::metadata::{MetadataError, Robots, ShareImage, SiteConfig};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
    #[error("invalid SITE_INDEXING `{0}`: expected true or false")]
    InvalidIndexing(String),
    #[error("invalid site config: {0}")]
    Site(#[from] MetadataError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub site: SiteConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_BASE_URL`: absolute http(s) origin used for canonical and share URLs
    /// - `SITE_NAME`: brand shown in the header and `og:site_name`
    /// - `SITE_SHARE_IMAGE`: absolute or base-relative default share image
    /// - `SITE_LANG`: document language, default `en`
    /// - `SITE_INDEXING`: `true` (default) or `false` to keep crawlers out
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value fails to parse or the resulting
    /// site configuration does not validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let mut site = SiteConfig::default();
        if let Some(base_url) = var("SITE_BASE_URL") {
            site.base_url = base_url;
        }
        if let Some(name) = var("SITE_NAME") {
            site.site_name = name;
        }
        if let Some(url) = var("SITE_SHARE_IMAGE") {
            site.share_image = ShareImage { url, ..site.share_image };
        }
        if let Some(lang) = var("SITE_LANG") {
            site.lang = lang;
        }
        if let Some(raw) = var("SITE_INDEXING") {
            site.robots = match parse_bool(&raw) {
                Some(true) => Robots::default(),
                Some(false) => Robots::restricted(),
                None => return Err(ConfigError::InvalidIndexing(raw)),
            };
        }

        Ok(Self { port, site: site.validated()? })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
