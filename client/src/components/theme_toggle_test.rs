use super::*;

#[test]
fn next_mode_cycles_through_all_modes() {
    let mut mode = ThemeMode::Light;
    let mut seen = Vec::new();
    for _ in 0..3 {
        seen.push(mode);
        mode = next_mode(mode);
    }
    assert_eq!(seen, vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]);
    assert_eq!(mode, ThemeMode::Light);
}

#[test]
fn toggle_icon_marks_system_regardless_of_resolution() {
    assert_eq!(toggle_icon(ThemeMode::System, ResolvedTheme::Dark), "◐");
    assert_eq!(toggle_icon(ThemeMode::System, ResolvedTheme::Light), "◐");
    assert_eq!(toggle_icon(ThemeMode::Dark, ResolvedTheme::Dark), "☾");
    assert_eq!(toggle_icon(ThemeMode::Light, ResolvedTheme::Light), "☀");
}

#[test]
fn toggle_title_names_current_and_next() {
    assert_eq!(toggle_title(ThemeMode::Dark), "Theme: dark (switch to system)");
}
