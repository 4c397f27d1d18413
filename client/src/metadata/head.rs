//! Flatten a descriptor into head elements.

#[cfg(test)]
#[path = "head_test.rs"]
mod head_test;

use super::descriptor::{MetadataDescriptor, Robots};

/// One element of the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    /// `<meta name=... content=...>`
    MetaName { name: &'static str, content: String },
    /// `<meta property=... content=...>` (Open Graph)
    MetaProperty { property: &'static str, content: String },
    /// `<link rel=... href=...>`
    Link { rel: &'static str, href: String },
}

impl HeadTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        Self::MetaName { name, content: content.into() }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        Self::MetaProperty { property, content: content.into() }
    }

    fn link(rel: &'static str, href: impl Into<String>) -> Self {
        Self::Link { rel, href: href.into() }
    }

    /// The `content`/`href`/text value carried by this tag.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Title(text) => text,
            Self::MetaName { content, .. } | Self::MetaProperty { content, .. } => content,
            Self::Link { href, .. } => href,
        }
    }
}

/// Every head element for `descriptor`, in emission order.
#[must_use]
pub fn head_tags(descriptor: &MetadataDescriptor) -> Vec<HeadTag> {
    let d = descriptor;
    let mut tags = vec![
        HeadTag::Title(d.title.clone()),
        HeadTag::name("description", d.description.clone()),
        HeadTag::name("keywords", d.keywords.join(",")),
    ];
    tags.extend(d.authors.iter().map(|author| HeadTag::name("author", author.clone())));
    tags.extend([
        HeadTag::name("creator", d.creator.clone()),
        HeadTag::name("publisher", d.publisher.clone()),
        HeadTag::name("robots", d.robots.directive()),
        HeadTag::name(Robots::CRAWLER, d.robots.crawler_directive()),
        HeadTag::link("canonical", d.canonical_url.clone()),
    ]);

    let og = &d.open_graph;
    tags.extend([
        HeadTag::property("og:title", og.title.clone()),
        HeadTag::property("og:description", og.description.clone()),
        HeadTag::property("og:url", og.url.clone()),
        HeadTag::property("og:site_name", og.site_name.clone()),
        HeadTag::property("og:locale", og.locale.clone()),
    ]);
    for image in &og.images {
        tags.extend([
            HeadTag::property("og:image", image.url.clone()),
            HeadTag::property("og:image:width", image.width.to_string()),
            HeadTag::property("og:image:height", image.height.to_string()),
            HeadTag::property("og:image:alt", image.alt.clone()),
        ]);
    }
    tags.push(HeadTag::property("og:type", og.kind.as_str()));

    let tw = &d.twitter;
    tags.extend([
        HeadTag::name("twitter:card", tw.card.as_str()),
        HeadTag::name("twitter:site", tw.site.clone()),
        HeadTag::name("twitter:creator", tw.creator.clone()),
        HeadTag::name("twitter:title", tw.title.clone()),
        HeadTag::name("twitter:description", tw.description.clone()),
    ]);
    tags.extend(tw.images.iter().map(|url| HeadTag::name("twitter:image", url.clone())));

    tags.extend([
        HeadTag::link("icon", d.icons.icon.clone()),
        HeadTag::link("shortcut icon", d.icons.shortcut.clone()),
        HeadTag::link("apple-touch-icon", d.icons.apple.clone()),
        HeadTag::name("viewport", d.viewport.content()),
    ]);
    tags
}
