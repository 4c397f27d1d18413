//! Validated document metadata record.
//!
//! DESIGN
//! ======
//! `MetadataDescriptor::resolve` is pure: site defaults, then page scopes in
//! nesting order with the deepest scope winning per field. The result is
//! validated so nothing empty or unresolvable reaches the head.

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod descriptor_test;

use serde::{Deserialize, Serialize};

use super::MetadataError;
use super::overrides::PageMetadata;
use super::site::{Icons, ShareImage, SiteConfig, Viewport};
use super::url::{is_absolute, is_base_relative, join, normalize_base_url};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OgType {
    #[default]
    Website,
    Article,
}

impl OgType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenGraph {
    pub kind: OgType,
    pub locale: String,
    pub url: String,
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub images: Vec<OgImage>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TwitterCardType {
    Summary,
    #[default]
    SummaryLargeImage,
}

impl TwitterCardType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: TwitterCardType,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub creator: String,
    pub site: String,
}

/// Preview length limit in crawler directives; `Unlimited` renders as `-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviewLimit {
    Unlimited,
    Max(u32),
}

impl PreviewLimit {
    fn directive(self) -> String {
        match self {
            Self::Unlimited => "-1".to_owned(),
            Self::Max(n) => n.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImagePreview {
    None,
    Standard,
    Large,
}

impl ImagePreview {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Standard => "standard",
            Self::Large => "large",
        }
    }
}

/// Extended directives for a named crawler (`googlebot`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlerDirectives {
    pub index: bool,
    pub follow: bool,
    pub max_video_preview: PreviewLimit,
    pub max_image_preview: ImagePreview,
    pub max_snippet: PreviewLimit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub crawler: CrawlerDirectives,
}

impl Default for Robots {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
            crawler: CrawlerDirectives {
                index: true,
                follow: true,
                max_video_preview: PreviewLimit::Unlimited,
                max_image_preview: ImagePreview::Large,
                max_snippet: PreviewLimit::Unlimited,
            },
        }
    }
}

impl Robots {
    /// Name of the crawler the extended directives target.
    pub const CRAWLER: &'static str = "googlebot";

    /// Keep the page out of indexes and previews entirely.
    #[must_use]
    pub fn restricted() -> Self {
        Self {
            index: false,
            follow: false,
            crawler: CrawlerDirectives {
                index: false,
                follow: false,
                max_video_preview: PreviewLimit::Max(0),
                max_image_preview: ImagePreview::None,
                max_snippet: PreviewLimit::Max(0),
            },
        }
    }

    /// `robots` meta content, e.g. `index, follow`.
    #[must_use]
    pub fn directive(&self) -> String {
        index_follow(self.index, self.follow)
    }

    /// Crawler-specific meta content including preview limits.
    #[must_use]
    pub fn crawler_directive(&self) -> String {
        let c = &self.crawler;
        format!(
            "{}, max-video-preview:{}, max-image-preview:{}, max-snippet:{}",
            index_follow(c.index, c.follow),
            c.max_video_preview.directive(),
            c.max_image_preview.as_str(),
            c.max_snippet.directive()
        )
    }
}

fn index_follow(index: bool, follow: bool) -> String {
    let index = if index { "index" } else { "noindex" };
    let follow = if follow { "follow" } else { "nofollow" };
    format!("{index}, {follow}")
}

/// Complete metadata for one document.
#[derive(Clone, Debug, PartialEq)]
pub struct MetadataDescriptor {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<String>,
    pub creator: String,
    pub publisher: String,
    pub canonical_url: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
    pub icons: Icons,
    pub viewport: Viewport,
}

impl MetadataDescriptor {
    /// Descriptor for the site root with no page overrides.
    ///
    /// # Errors
    ///
    /// See [`MetadataDescriptor::resolve`].
    pub fn for_site(site: &SiteConfig) -> Result<Self, MetadataError> {
        Self::resolve(site, &[])
    }

    /// Merge `scopes` (outermost first) over the site defaults.
    ///
    /// Page fields are checked one by one; an unusable page value falls back
    /// to the site value without discarding the page's other overrides.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] when the site configuration itself is
    /// invalid: bad base URL, an empty required field or an unresolvable
    /// default image.
    pub fn resolve(site: &SiteConfig, scopes: &[PageMetadata]) -> Result<Self, MetadataError> {
        let base = normalize_base_url(&site.base_url)?;
        let page = PageMetadata::flatten(scopes).sanitized(&site.share_image);

        let path = page.path.as_deref().unwrap_or("/");
        let canonical_url = join(&base, path);

        let title = page.title.clone().unwrap_or_else(|| site.title.clone());
        let description = page.description.clone().unwrap_or_else(|| site.description.clone());
        let social_description = page
            .description
            .clone()
            .or_else(|| site.social_description.clone().filter(|d| !d.trim().is_empty()))
            .unwrap_or_else(|| description.clone());

        let share: &ShareImage = page.share_image.as_ref().unwrap_or(&site.share_image);
        let image_url = resolve_image(&base, &share.url)?;

        let keywords = dedup_keywords(page.keywords.as_deref().unwrap_or(&site.keywords));

        let descriptor = Self {
            title: title.clone(),
            description: description.clone(),
            keywords,
            authors: site.authors.clone(),
            creator: site.creator.clone(),
            publisher: site.publisher.clone(),
            canonical_url: canonical_url.clone(),
            open_graph: OpenGraph {
                kind: page.og_type.unwrap_or_default(),
                locale: site.locale.clone(),
                url: canonical_url,
                site_name: site.site_name.clone(),
                title: title.clone(),
                description,
                images: vec![OgImage {
                    url: image_url.clone(),
                    width: share.width,
                    height: share.height,
                    alt: share.alt.clone(),
                }],
            },
            twitter: TwitterCard {
                card: TwitterCardType::default(),
                title,
                description: social_description,
                images: vec![image_url],
                creator: site.twitter_creator.clone(),
                site: site.twitter_site.clone(),
            },
            robots: page.robots.unwrap_or(site.robots),
            icons: site.icons.clone(),
            viewport: site.viewport,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Check that every crawler/social field is present and every image resolves.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), MetadataError> {
        let required: [(&'static str, &str); 14] = [
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("creator", self.creator.as_str()),
            ("publisher", self.publisher.as_str()),
            ("canonical_url", self.canonical_url.as_str()),
            ("open_graph.locale", self.open_graph.locale.as_str()),
            ("open_graph.site_name", self.open_graph.site_name.as_str()),
            ("open_graph.title", self.open_graph.title.as_str()),
            ("open_graph.description", self.open_graph.description.as_str()),
            ("twitter.title", self.twitter.title.as_str()),
            ("twitter.description", self.twitter.description.as_str()),
            ("twitter.creator", self.twitter.creator.as_str()),
            ("twitter.site", self.twitter.site.as_str()),
            ("icons.icon", self.icons.icon.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(MetadataError::EmptyField(field));
            }
        }
        if self.keywords.is_empty() {
            return Err(MetadataError::EmptyField("keywords"));
        }
        if self.authors.iter().all(|a| a.trim().is_empty()) {
            return Err(MetadataError::EmptyField("authors"));
        }
        if !is_absolute(&self.canonical_url) {
            return Err(MetadataError::InvalidBaseUrl(self.canonical_url.clone()));
        }
        if self.open_graph.images.is_empty() {
            return Err(MetadataError::EmptyField("open_graph.images"));
        }
        if self.twitter.images.is_empty() {
            return Err(MetadataError::EmptyField("twitter.images"));
        }
        for image in &self.open_graph.images {
            if image.alt.trim().is_empty() {
                return Err(MetadataError::EmptyField("open_graph.images.alt"));
            }
            if image.width == 0 || image.height == 0 {
                return Err(MetadataError::EmptyField("open_graph.images.size"));
            }
        }
        for url in self.image_urls() {
            check_image(url)?;
        }
        for icon in [&self.icons.icon, &self.icons.shortcut, &self.icons.apple] {
            check_image(icon)?;
        }
        Ok(())
    }

    /// Every share-image reference, Open Graph first.
    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        self.open_graph
            .images
            .iter()
            .map(|image| image.url.as_str())
            .chain(self.twitter.images.iter().map(String::as_str))
    }
}

fn resolve_image(base: &str, url: &str) -> Result<String, MetadataError> {
    check_image(url)?;
    Ok(join(base, url))
}

fn check_image(url: &str) -> Result<(), MetadataError> {
    if is_absolute(url) || is_base_relative(url) {
        Ok(())
    } else {
        Err(MetadataError::InvalidImageUrl(url.to_owned()))
    }
}

fn dedup_keywords(keywords: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let keyword = keyword.trim();
        if !keyword.is_empty() && !out.iter().any(|k| k.eq_ignore_ascii_case(keyword)) {
            out.push(keyword.to_owned());
        }
    }
    out
}
