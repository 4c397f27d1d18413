//! Per-page partial metadata.
//!
//! Scopes nest (layout → section → page). Merging is per field and the
//! deepest scope that sets a non-empty value wins; anything left unset falls
//! back to the site defaults in `MetadataDescriptor::resolve`.

#[cfg(test)]
#[path = "overrides_test.rs"]
mod overrides_test;

use super::descriptor::{OgType, Robots};
use super::site::ShareImage;
use super::url::{is_absolute, is_base_relative};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Path relative to the base URL, used for the canonical URL.
    pub path: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub share_image: Option<ShareImage>,
    pub robots: Option<Robots>,
    pub og_type: Option<OgType>,
}

impl PageMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_keywords<I, K>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_share_image(mut self, image: ShareImage) -> Self {
        self.share_image = Some(image);
        self
    }

    #[must_use]
    pub fn with_robots(mut self, robots: Robots) -> Self {
        self.robots = Some(robots);
        self
    }

    #[must_use]
    pub fn with_og_type(mut self, og_type: OgType) -> Self {
        self.og_type = Some(og_type);
        self
    }

    /// Layer `deeper` on top of `self`; set, non-empty fields of `deeper` win.
    #[must_use]
    pub fn merge(self, deeper: PageMetadata) -> PageMetadata {
        let deeper = deeper.cleaned();
        PageMetadata {
            path: deeper.path.or(self.path),
            title: deeper.title.or(self.title),
            description: deeper.description.or(self.description),
            keywords: deeper.keywords.or(self.keywords),
            share_image: deeper.share_image.or(self.share_image),
            robots: deeper.robots.or(self.robots),
            og_type: deeper.og_type.or(self.og_type),
        }
    }

    /// Fold nested scopes, outermost first.
    #[must_use]
    pub fn flatten(scopes: &[PageMetadata]) -> PageMetadata {
        scopes.iter().cloned().fold(PageMetadata::default(), PageMetadata::merge)
    }

    /// Judge each field on its own: drop values that cannot be emitted and
    /// complete a partial share image from `defaults`. Whatever is dropped
    /// falls back to the site value while the remaining fields still apply.
    #[must_use]
    pub fn sanitized(self, defaults: &ShareImage) -> PageMetadata {
        let path = self.path.filter(|path| {
            let usable = !is_absolute(path) && !path.chars().any(char::is_whitespace);
            if !usable {
                log::warn!("ignoring page path `{path}`: expected a path below the base URL");
            }
            usable
        });
        let share_image = self.share_image.and_then(|image| {
            if !is_absolute(&image.url) && !is_base_relative(&image.url) {
                log::warn!("ignoring share image `{}`: neither absolute nor base-relative", image.url);
                return None;
            }
            Some(ShareImage {
                width: if image.width == 0 { defaults.width } else { image.width },
                height: if image.height == 0 { defaults.height } else { image.height },
                alt: if image.alt.trim().is_empty() { defaults.alt.clone() } else { image.alt },
                url: image.url,
            })
        });
        PageMetadata { path, share_image, ..self }
    }

    /// Drop fields that are present but blank so they cannot shadow defaults.
    fn cleaned(self) -> PageMetadata {
        PageMetadata {
            path: non_blank(self.path),
            title: non_blank(self.title),
            description: non_blank(self.description),
            keywords: self
                .keywords
                .filter(|keywords| keywords.iter().any(|k| !k.trim().is_empty())),
            share_image: self.share_image.filter(|image| !image.url.trim().is_empty()),
            robots: self.robots,
            og_type: self.og_type,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
