use super::*;

#[test]
fn normalize_strips_trailing_slashes() {
    assert_eq!(normalize_base_url("https://hodlcoin.co.in/").as_deref(), Ok("https://hodlcoin.co.in"));
    assert_eq!(normalize_base_url(" http://localhost:3000// ").as_deref(), Ok("http://localhost:3000"));
}

#[test]
fn normalize_keeps_path_prefix() {
    assert_eq!(normalize_base_url("https://example.org/app/").as_deref(), Ok("https://example.org/app"));
}

#[test]
fn normalize_rejects_non_http_and_malformed() {
    for raw in ["hodlcoin.co.in", "ftp://host", "https://", "https:///path", "https://a b", "https://h?q=1", "https://h#top"] {
        assert_eq!(normalize_base_url(raw), Err(MetadataError::InvalidBaseUrl(raw.to_owned())), "{raw}");
    }
}

#[test]
fn absolute_and_relative_classification() {
    assert!(is_absolute("https://cdn.example/x.png"));
    assert!(!is_absolute("/x.png"));
    assert!(!is_absolute("https:///x.png"));
    assert!(is_base_relative("/x.png"));
    assert!(!is_base_relative("//cdn.example/x.png"));
    assert!(!is_base_relative("x.png"));
}

#[test]
fn join_inserts_single_slash() {
    assert_eq!(join("https://hodlcoin.co.in", "/"), "https://hodlcoin.co.in/");
    assert_eq!(join("https://hodlcoin.co.in", "/hodlcoin-og.png"), "https://hodlcoin.co.in/hodlcoin-og.png");
    assert_eq!(join("https://hodlcoin.co.in", "stake"), "https://hodlcoin.co.in/stake");
}

#[test]
fn join_passes_absolute_through() {
    assert_eq!(join("https://hodlcoin.co.in", "https://cdn.example/og.png"), "https://cdn.example/og.png");
}
