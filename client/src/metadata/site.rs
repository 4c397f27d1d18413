//! Static site configuration.
//!
//! `SiteConfig::default()` carries the production values for the hodlCoin
//! staking site; the server overrides individual fields from its environment.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use serde::{Deserialize, Serialize};

use super::MetadataError;
use super::descriptor::{MetadataDescriptor, Robots};
use super::url::normalize_base_url;

pub const DEFAULT_BASE_URL: &str = "https://hodlcoin.co.in";
pub const SHARE_IMAGE_PATH: &str = "/hodlcoin-og.png";
pub const SHARE_IMAGE_WIDTH: u32 = 1200;
pub const SHARE_IMAGE_HEIGHT: u32 = 630;

const SITE_NAME: &str = "hodlCoin Staking Platform";
const TITLE: &str = "hodlCoin Staking Platform | Self-Stabilizing Staking Vaults";
const DESCRIPTION: &str = "Self-Stabilizing Staking vaults with price stability mechanisms designed to \
increase value over time. Stake your tokens on EVM chains, Ergo, or Alephium. Unstaking fees benefit \
vault creators and long-term stakers.";
const SOCIAL_DESCRIPTION: &str = "Self-Stabilizing Staking vaults with price stability mechanisms designed \
to increase value over time. Stake on EVM chains, Ergo, or Alephium.";
const KEYWORDS: [&str; 13] = [
    "hodlCoin",
    "staking",
    "crypto staking",
    "DeFi",
    "self-stabilizing",
    "staking vaults",
    "EVM chains",
    "Ergo",
    "Alephium",
    "blockchain",
    "cryptocurrency",
    "token staking",
    "long-term holding",
];
const ORGANIZATION: &str = "Stability Nexus";
const TWITTER_HANDLE: &str = "@StabilityNexus";
const FAVICON: &str = "/favicon.ico";

/// Default share image used by Open Graph and Twitter previews.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

impl Default for ShareImage {
    fn default() -> Self {
        Self {
            url: SHARE_IMAGE_PATH.to_owned(),
            width: SHARE_IMAGE_WIDTH,
            height: SHARE_IMAGE_HEIGHT,
            alt: "hodlCoin Logo - Self-Stabilizing Staking Platform".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icons {
    pub icon: String,
    pub shortcut: String,
    pub apple: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self { icon: FAVICON.to_owned(), shortcut: FAVICON.to_owned(), apple: FAVICON.to_owned() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportWidth {
    DeviceWidth,
    Pixels(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: ViewportWidth,
    pub initial_scale: f32,
    pub maximum_scale: Option<f32>,
}

impl Viewport {
    /// Value of the `viewport` meta tag.
    #[must_use]
    pub fn content(&self) -> String {
        let width = match self.width {
            ViewportWidth::DeviceWidth => "device-width".to_owned(),
            ViewportWidth::Pixels(px) => px.to_string(),
        };
        let mut content = format!("width={width}, initial-scale={}", self.initial_scale);
        if let Some(max) = self.maximum_scale {
            content.push_str(&format!(", maximum-scale={max}"));
        }
        content
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: ViewportWidth::DeviceWidth, initial_scale: 1.0, maximum_scale: Some(1.0) }
    }
}

/// Web font with a guaranteed system fallback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontStack {
    pub family: String,
    pub weights: Vec<u16>,
    /// CSS custom property carrying the stack.
    pub variable: String,
    pub fallback: Vec<String>,
}

impl FontStack {
    /// `font-family` value; always ends in the generic fallback stack.
    #[must_use]
    pub fn css_family(&self) -> String {
        std::iter::once(format!("'{}'", self.family))
            .chain(self.fallback.iter().cloned())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Root rule declaring the custom property and applying it to `body`.
    #[must_use]
    pub fn root_css(&self) -> String {
        format!(":root{{{}:{}}}body{{font-family:var({})}}", self.variable, self.css_family(), self.variable)
    }

    #[must_use]
    pub fn stylesheet_href(&self) -> String {
        let weights = self.weights.iter().map(u16::to_string).collect::<Vec<_>>().join(";");
        format!(
            "https://fonts.googleapis.com/css2?family={}:wght@{weights}&display=swap",
            self.family.replace(' ', "+")
        )
    }
}

impl Default for FontStack {
    fn default() -> Self {
        Self {
            family: "Poppins".to_owned(),
            weights: vec![300, 400, 500, 600, 700, 800, 900],
            variable: "--font-poppins".to_owned(),
            fallback: vec!["system-ui".to_owned(), "arial".to_owned(), "sans-serif".to_owned()],
        }
    }
}

/// Site-wide defaults every page's metadata falls back to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub base_url: String,
    pub lang: String,
    pub site_name: String,
    pub title: String,
    pub description: String,
    /// Shorter description for Twitter cards; `description` when absent.
    pub social_description: Option<String>,
    pub keywords: Vec<String>,
    pub authors: Vec<String>,
    pub creator: String,
    pub publisher: String,
    pub locale: String,
    pub share_image: ShareImage,
    pub twitter_creator: String,
    pub twitter_site: String,
    /// Site-wide crawler directives; pages may override them.
    pub robots: Robots,
    pub icons: Icons,
    pub viewport: Viewport,
    pub font: FontStack,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            lang: "en".to_owned(),
            site_name: SITE_NAME.to_owned(),
            title: TITLE.to_owned(),
            description: DESCRIPTION.to_owned(),
            social_description: Some(SOCIAL_DESCRIPTION.to_owned()),
            keywords: KEYWORDS.iter().map(|k| (*k).to_owned()).collect(),
            authors: vec![ORGANIZATION.to_owned()],
            creator: ORGANIZATION.to_owned(),
            publisher: ORGANIZATION.to_owned(),
            locale: "en_US".to_owned(),
            share_image: ShareImage::default(),
            twitter_creator: TWITTER_HANDLE.to_owned(),
            twitter_site: TWITTER_HANDLE.to_owned(),
            robots: Robots::default(),
            icons: Icons::default(),
            viewport: Viewport::default(),
            font: FontStack::default(),
        }
    }
}

impl SiteConfig {
    /// Normalize the base URL and check that the site defaults produce a
    /// complete descriptor.
    ///
    /// # Errors
    ///
    /// Returns the first [`MetadataError`] found.
    pub fn validated(mut self) -> Result<Self, MetadataError> {
        self.base_url = normalize_base_url(&self.base_url)?;
        if self.lang.trim().is_empty() {
            return Err(MetadataError::EmptyField("lang"));
        }
        MetadataDescriptor::for_site(&self)?;
        Ok(self)
    }
}
