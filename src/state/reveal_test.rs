use super::*;

// =============================================================
// Stagger delay
// =============================================================

#[test]
fn delay_scales_linearly_with_index() {
    assert_eq!(delay_ms(0), 0);
    assert_eq!(delay_ms(1), 80);
    assert_eq!(delay_ms(3), 240);
}

#[test]
fn delay_saturates_instead_of_overflowing() {
    assert_eq!(delay_ms(u32::MAX), u32::MAX);
}

// =============================================================
// Attribute parsing
// =============================================================

#[test]
fn missing_attribute_means_no_stagger() {
    assert_eq!(parse_delay_index(None), 0);
}

#[test]
fn garbage_attribute_means_no_stagger() {
    assert_eq!(parse_delay_index(Some("")), 0);
    assert_eq!(parse_delay_index(Some("soon")), 0);
    assert_eq!(parse_delay_index(Some("-2")), 0);
    assert_eq!(parse_delay_index(Some("1.5")), 0);
}

#[test]
fn numeric_attribute_parses_with_whitespace() {
    assert_eq!(parse_delay_index(Some("2")), 2);
    assert_eq!(parse_delay_index(Some(" 4 ")), 4);
}

// =============================================================
// CSS value
// =============================================================

#[test]
fn transition_delay_formats_milliseconds() {
    assert_eq!(transition_delay(0), "0ms");
    assert_eq!(transition_delay(2), "160ms");
}
