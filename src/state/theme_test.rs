use super::*;

// =============================================================
// Parsing and literals
// =============================================================

#[test]
fn parse_accepts_exact_literals_only() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("dark "), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("auto"), None);
}

#[test]
fn as_str_round_trips_through_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

// =============================================================
// Startup resolution precedence
// =============================================================

#[test]
fn saved_preference_wins_over_system() {
    assert_eq!(
        Theme::resolve_initial(Some(Theme::Light), true),
        Theme::Light
    );
    assert_eq!(
        Theme::resolve_initial(Some(Theme::Dark), false),
        Theme::Dark
    );
}

#[test]
fn no_preference_falls_back_to_system() {
    assert_eq!(Theme::resolve_initial(None, true), Theme::Dark);
    assert_eq!(Theme::resolve_initial(None, false), Theme::Light);
}

#[test]
fn from_system_maps_match_flag() {
    assert_eq!(Theme::from_system(true), Theme::Dark);
    assert_eq!(Theme::from_system(false), Theme::Light);
}

// =============================================================
// Toggle behavior
// =============================================================

#[test]
fn toggled_flips_and_is_involutive() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn pressed_state_tracks_dark() {
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

#[test]
fn toggle_text_names_the_other_theme() {
    assert_eq!(Theme::Light.toggle_text(), "Dark Mode");
    assert_eq!(Theme::Dark.toggle_text(), "Light Mode");
}

#[test]
fn toggle_aria_label_describes_next_action() {
    assert_eq!(Theme::Light.toggle_aria_label(), "Switch to dark mode");
    assert_eq!(Theme::Dark.toggle_aria_label(), "Switch to light mode");
}

// =============================================================
// Scenario: fresh load, system light, then user toggles
// =============================================================

#[test]
fn fresh_load_then_toggle_scenario() {
    // Fresh page load, nothing stored, system reports light.
    let initial = Theme::resolve_initial(None, false);
    assert_eq!(initial, Theme::Light);
    assert_eq!(initial.toggle_text(), "Dark Mode");

    // User clicks the toggle: dark is applied and would be persisted.
    let after_click = initial.toggled();
    assert_eq!(after_click, Theme::Dark);
    assert_eq!(after_click.toggle_text(), "Light Mode");
    assert_eq!(after_click.as_str(), "dark");

    // A later system change to light must not win once a choice exists:
    // resolution with the saved value ignores the system flag.
    assert_eq!(
        Theme::resolve_initial(Some(after_click), false),
        Theme::Dark
    );
}
