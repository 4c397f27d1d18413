use super::*;

fn site() -> SiteConfig {
    SiteConfig::default()
}

#[test]
fn site_descriptor_uses_production_defaults() {
    let d = MetadataDescriptor::for_site(&site()).expect("defaults resolve");
    assert_eq!(d.title, "hodlCoin Staking Platform | Self-Stabilizing Staking Vaults");
    assert_eq!(d.canonical_url, "https://hodlcoin.co.in/");
    assert_eq!(d.open_graph.site_name, "hodlCoin Staking Platform");
    assert_eq!(d.open_graph.locale, "en_US");
    assert_eq!(d.open_graph.kind, OgType::Website);
    assert_eq!(d.twitter.card, TwitterCardType::SummaryLargeImage);
    assert_eq!(d.twitter.site, "@StabilityNexus");
    assert_eq!(d.authors, vec!["Stability Nexus".to_owned()]);
}

#[test]
fn canonical_and_og_url_are_absolute_and_equal() {
    for path in [None, Some("/"), Some("/stake"), Some("vaults/new")] {
        let mut page = PageMetadata::new();
        page.path = path.map(str::to_owned);
        let d = MetadataDescriptor::resolve(&site(), &[page]).expect("resolves");
        assert!(is_absolute(&d.canonical_url), "{}", d.canonical_url);
        assert!(d.canonical_url.starts_with("https://hodlcoin.co.in/"));
        assert_eq!(d.open_graph.url, d.canonical_url);
    }
}

#[test]
fn canonical_url_joins_page_path() {
    let d = MetadataDescriptor::resolve(&site(), &[PageMetadata::new().with_path("/stake")]).expect("resolves");
    assert_eq!(d.canonical_url, "https://hodlcoin.co.in/stake");
}

#[test]
fn trailing_slash_base_does_not_double_slash() {
    let site = SiteConfig { base_url: "https://hodlcoin.co.in/".to_owned(), ..site() };
    let d = MetadataDescriptor::for_site(&site).expect("resolves");
    assert_eq!(d.canonical_url, "https://hodlcoin.co.in/");
    assert_eq!(d.open_graph.images[0].url, "https://hodlcoin.co.in/hodlcoin-og.png");
}

#[test]
fn every_image_reference_resolves_to_absolute() {
    let d = MetadataDescriptor::for_site(&site()).expect("resolves");
    let urls: Vec<&str> = d.image_urls().collect();
    assert_eq!(urls, vec!["https://hodlcoin.co.in/hodlcoin-og.png", "https://hodlcoin.co.in/hodlcoin-og.png"]);
    assert!(urls.iter().all(|u| is_absolute(u)));
}

#[test]
fn absolute_share_image_is_kept() {
    let image = ShareImage { url: "https://cdn.example/og.png".to_owned(), ..ShareImage::default() };
    let d = MetadataDescriptor::resolve(&site(), &[PageMetadata::new().with_share_image(image)]).expect("resolves");
    assert_eq!(d.twitter.images, vec!["https://cdn.example/og.png".to_owned()]);
}

#[test]
fn share_image_dimensions_and_alt_carry_over() {
    let d = MetadataDescriptor::for_site(&site()).expect("resolves");
    let og = &d.open_graph.images[0];
    assert_eq!((og.width, og.height), (1200, 630));
    assert_eq!(og.alt, "hodlCoin Logo - Self-Stabilizing Staking Platform");
}

#[test]
fn unresolvable_page_image_falls_back_to_site_image() {
    let image = ShareImage { url: "og.png".to_owned(), ..ShareImage::default() };
    let d = MetadataDescriptor::resolve(&site(), &[PageMetadata::new().with_share_image(image)]).expect("resolves");
    assert_eq!(d.twitter.images, vec!["https://hodlcoin.co.in/hodlcoin-og.png".to_owned()]);
}

#[test]
fn unresolvable_site_image_is_rejected() {
    let site = SiteConfig { share_image: ShareImage { url: "og.png".to_owned(), ..ShareImage::default() }, ..site() };
    assert_eq!(MetadataDescriptor::for_site(&site), Err(MetadataError::InvalidImageUrl("og.png".to_owned())));
}

#[test]
fn restricted_page_with_bad_image_keeps_its_other_overrides() {
    let page = PageMetadata::new()
        .with_title("Private")
        .with_robots(Robots::restricted())
        .with_share_image(ShareImage { url: "og.png".to_owned(), ..ShareImage::default() });
    let d = MetadataDescriptor::resolve(&site(), &[page]).expect("resolves");

    assert_eq!(d.title, "Private");
    assert!(!d.robots.index);
    assert_eq!(d.robots.directive(), "noindex, nofollow");
    assert_eq!(d.open_graph.images[0].url, "https://hodlcoin.co.in/hodlcoin-og.png");
}

#[test]
fn partial_page_image_is_completed_from_site_image() {
    let image = ShareImage { url: "/x.png".to_owned(), width: 0, height: 0, alt: " ".to_owned() };
    let d = MetadataDescriptor::resolve(&site(), &[PageMetadata::new().with_share_image(image)]).expect("resolves");
    let og = &d.open_graph.images[0];

    assert_eq!(og.url, "https://hodlcoin.co.in/x.png");
    assert_eq!((og.width, og.height), (1200, 630));
    assert_eq!(og.alt, "hodlCoin Logo - Self-Stabilizing Staking Platform");
}

#[test]
fn blank_site_image_alt_is_rejected() {
    let site = SiteConfig { share_image: ShareImage { alt: String::new(), ..ShareImage::default() }, ..site() };
    assert_eq!(MetadataDescriptor::for_site(&site), Err(MetadataError::EmptyField("open_graph.images.alt")));
}

#[test]
fn zero_sized_site_image_is_rejected() {
    let site = SiteConfig { share_image: ShareImage { width: 0, ..ShareImage::default() }, ..site() };
    assert_eq!(MetadataDescriptor::for_site(&site), Err(MetadataError::EmptyField("open_graph.images.size")));
}

#[test]
fn absolute_page_path_is_ignored_for_canonical() {
    let page = PageMetadata::new().with_path("https://elsewhere.example/page").with_title("Kept");
    let d = MetadataDescriptor::resolve(&site(), &[page]).expect("resolves");
    assert_eq!(d.canonical_url, "https://hodlcoin.co.in/");
    assert_eq!(d.title, "Kept");
}

#[test]
fn invalid_base_url_is_rejected() {
    let site = SiteConfig { base_url: "hodlcoin.co.in".to_owned(), ..site() };
    assert!(matches!(MetadataDescriptor::for_site(&site), Err(MetadataError::InvalidBaseUrl(_))));
}

#[test]
fn twitter_description_prefers_page_then_social() {
    let d = MetadataDescriptor::for_site(&site()).expect("resolves");
    assert_eq!(Some(d.twitter.description.clone()), site().social_description);
    assert_ne!(d.twitter.description, d.description);

    let page = PageMetadata::new().with_description("Stake on Ergo.");
    let d = MetadataDescriptor::resolve(&site(), &[page]).expect("resolves");
    assert_eq!(d.twitter.description, "Stake on Ergo.");
    assert_eq!(d.open_graph.description, "Stake on Ergo.");
}

#[test]
fn twitter_description_falls_back_to_description() {
    let site = SiteConfig { social_description: None, ..site() };
    let d = MetadataDescriptor::for_site(&site).expect("resolves");
    assert_eq!(d.twitter.description, d.description);
}

#[test]
fn keywords_are_trimmed_and_deduplicated() {
    let page = PageMetadata::new().with_keywords(["DeFi", " defi ", "", "Ergo"]);
    let d = MetadataDescriptor::resolve(&site(), &[page]).expect("resolves");
    assert_eq!(d.keywords, vec!["DeFi".to_owned(), "Ergo".to_owned()]);
}

#[test]
fn empty_keyword_list_is_rejected() {
    let site = SiteConfig { keywords: Vec::new(), ..site() };
    assert_eq!(MetadataDescriptor::for_site(&site), Err(MetadataError::EmptyField("keywords")));
}

#[test]
fn blank_site_field_is_reported_by_name() {
    let site = SiteConfig { twitter_site: " ".to_owned(), ..site() };
    assert_eq!(MetadataDescriptor::for_site(&site), Err(MetadataError::EmptyField("twitter.site")));
}

#[test]
fn robots_default_allows_everything() {
    let robots = Robots::default();
    assert_eq!(robots.directive(), "index, follow");
    assert_eq!(
        robots.crawler_directive(),
        "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"
    );
}

#[test]
fn restricted_robots_blocks_indexing_and_previews() {
    let robots = Robots::restricted();
    assert_eq!(robots.directive(), "noindex, nofollow");
    assert_eq!(
        robots.crawler_directive(),
        "noindex, nofollow, max-video-preview:0, max-image-preview:none, max-snippet:0"
    );
}

#[test]
fn page_robots_override_applies() {
    let page = PageMetadata::new().with_robots(Robots::restricted());
    let d = MetadataDescriptor::resolve(&site(), &[page]).expect("resolves");
    assert!(!d.robots.index);
}

#[test]
fn site_robots_apply_when_page_is_silent() {
    let site = SiteConfig { robots: Robots::restricted(), ..site() };
    let d = MetadataDescriptor::for_site(&site).expect("resolves");
    assert_eq!(d.robots.directive(), "noindex, nofollow");

    let page = PageMetadata::new().with_robots(Robots::default());
    let d = MetadataDescriptor::resolve(&site, &[page]).expect("resolves");
    assert_eq!(d.robots.directive(), "index, follow");
}
