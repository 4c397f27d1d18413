use super::*;

#[test]
fn default_site_validates() {
    let site = SiteConfig::default().validated().expect("production defaults are complete");
    assert_eq!(site.base_url, DEFAULT_BASE_URL);
    assert_eq!(site.keywords.len(), 13);
}

#[test]
fn validated_normalizes_base_url() {
    let site = SiteConfig { base_url: "https://staging.hodlcoin.co.in/".to_owned(), ..SiteConfig::default() };
    assert_eq!(site.validated().map(|s| s.base_url).as_deref(), Ok("https://staging.hodlcoin.co.in"));
}

#[test]
fn validated_rejects_relative_base_url() {
    let site = SiteConfig { base_url: "/".to_owned(), ..SiteConfig::default() };
    assert_eq!(site.validated(), Err(MetadataError::InvalidBaseUrl("/".to_owned())));
}

#[test]
fn validated_rejects_blank_required_fields() {
    let site = SiteConfig { title: "  ".to_owned(), ..SiteConfig::default() };
    assert_eq!(site.validated(), Err(MetadataError::EmptyField("title")));

    let site = SiteConfig { lang: String::new(), ..SiteConfig::default() };
    assert_eq!(site.validated(), Err(MetadataError::EmptyField("lang")));
}

#[test]
fn viewport_disables_zoom_by_default() {
    assert_eq!(Viewport::default().content(), "width=device-width, initial-scale=1, maximum-scale=1");
}

#[test]
fn viewport_without_maximum_scale() {
    let viewport = Viewport { width: ViewportWidth::Pixels(980), initial_scale: 1.5, maximum_scale: None };
    assert_eq!(viewport.content(), "width=980, initial-scale=1.5");
}

#[test]
fn font_stack_always_ends_in_system_fallback() {
    let font = FontStack::default();
    assert_eq!(font.css_family(), "'Poppins', system-ui, arial, sans-serif");
    assert_eq!(
        font.root_css(),
        ":root{--font-poppins:'Poppins', system-ui, arial, sans-serif}body{font-family:var(--font-poppins)}"
    );
}

#[test]
fn font_stylesheet_requests_all_weights() {
    let href = FontStack::default().stylesheet_href();
    assert_eq!(
        href,
        "https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;500;600;700;800;900&display=swap"
    );
}

#[test]
fn share_image_defaults_to_og_dimensions() {
    let image = ShareImage::default();
    assert_eq!((image.url.as_str(), image.width, image.height), (SHARE_IMAGE_PATH, 1200, 630));
}
