//! Document metadata: site configuration, descriptors and head emission.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SiteConfig` is the static input, `PageMetadata` the per-page partial
//! override, `MetadataDescriptor` the validated merged record, and `head_tags`
//! flattens a descriptor into the head elements the shell emits. Everything
//! here is pure; rendering lives in `components::document_head`.

pub mod descriptor;
pub mod head;
pub mod overrides;
pub mod site;
pub mod url;

pub use descriptor::{
    CrawlerDirectives, ImagePreview, MetadataDescriptor, OgImage, OgType, OpenGraph, PreviewLimit, Robots,
    TwitterCard, TwitterCardType,
};
pub use head::{HeadTag, head_tags};
pub use overrides::PageMetadata;
pub use site::{
    FontStack, Icons, SHARE_IMAGE_HEIGHT, SHARE_IMAGE_PATH, SHARE_IMAGE_WIDTH, ShareImage, SiteConfig, Viewport,
    ViewportWidth,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("invalid base URL `{0}`: expected an absolute http(s) URL")]
    InvalidBaseUrl(String),
    #[error("required metadata field `{0}` is empty")]
    EmptyField(&'static str),
    #[error("image reference `{0}` is neither absolute nor base-relative")]
    InvalidImageUrl(String),
}
