use super::*;

use crate::metadata::Robots;

#[test]
fn customized_site_survives_the_document() {
    let site = SiteConfig {
        base_url: "https://staging.hodlcoin.co.in".to_owned(),
        site_name: "hodlCoin Staging".to_owned(),
        lang: "de".to_owned(),
        robots: Robots::restricted(),
        ..SiteConfig::default()
    };

    let decoded = decode(&encode(&site).expect("encodes")).expect("decodes");
    assert_eq!(decoded, site);
}

#[test]
fn closing_script_tag_is_escaped() {
    let site = SiteConfig { site_name: "x</script><script>alert(1)</script>".to_owned(), ..SiteConfig::default() };
    let json = encode(&site).expect("encodes");

    assert!(!json.contains('<'));
    assert_eq!(decode(&json).expect("decodes").site_name, site.site_name);
}

#[test]
fn garbage_is_rejected() {
    assert!(decode("").is_err());
    assert!(decode("{\"base_url\":1}").is_err());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn nothing_is_embedded_outside_a_browser() {
    assert_eq!(read_embedded(), None);
}
