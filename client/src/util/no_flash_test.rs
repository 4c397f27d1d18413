use super::*;

#[test]
fn script_reads_configured_storage_key() {
    let script = bootstrap_script(&ThemeOptions::default());
    assert!(script.contains(r#"localStorage.getItem("hodl-theme")"#));
}

#[test]
fn script_evaluates_dark_scheme_query_for_system() {
    let script = bootstrap_script(&ThemeOptions::default());
    assert!(script.contains(r#"window.matchMedia("(prefers-color-scheme: dark)")"#));
    assert!(script.contains(r#"if(c==="system")"#));
}

#[test]
fn script_accepts_only_known_modes() {
    let script = bootstrap_script(&ThemeOptions::default());
    assert!(script.contains(r#"["light","dark","system"].indexOf(p.chosen)"#));
}

#[test]
fn script_starts_from_configured_default() {
    let options = ThemeOptions { default_mode: ThemeMode::Dark, ..ThemeOptions::default() };
    assert!(bootstrap_script(&options).contains(r#"var c="dark";"#));
}

#[test]
fn class_attribute_swaps_root_classes() {
    let script = bootstrap_script(&ThemeOptions::default());
    assert!(script.contains(r#"d.classList.remove("light","dark");d.classList.add(r);"#));
    assert!(!script.contains("setAttribute"));
}

#[test]
fn data_theme_attribute_sets_root_attribute() {
    let options = ThemeOptions { attribute: ThemeAttribute::DataTheme, ..ThemeOptions::default() };
    let script = bootstrap_script(&options);
    assert!(script.contains(r#"d.setAttribute("data-theme",r);"#));
    assert!(!script.contains("classList"));
}

#[test]
fn storage_and_media_access_are_guarded() {
    let script = bootstrap_script(&ThemeOptions::default());
    assert_eq!(script.matches("try{").count(), 2);
    assert_eq!(script.matches("catch(e){}").count(), 2);
}

#[test]
fn storage_key_cannot_close_script_tag() {
    let options = ThemeOptions { storage_key: "k</script><b>".to_owned(), ..ThemeOptions::default() };
    let script = bootstrap_script(&options);
    assert!(!script.contains("</script>"));
    assert!(script.contains(r#""k\u003c/script>\u003cb>""#));
}

#[test]
fn script_is_self_invoking() {
    let script = bootstrap_script(&ThemeOptions::default());
    assert!(script.starts_with("(function(){"));
    assert!(script.ends_with("})();"));
}
