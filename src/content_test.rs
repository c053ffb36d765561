use super::*;

#[test]
fn embedded_profile_parses() {
    let profile = Profile::embedded().unwrap();
    assert_eq!(profile.name, "Jordan Avery");
    assert!(!profile.title.is_empty());
}

#[test]
fn embedded_profile_fills_every_section() {
    let profile = Profile::embedded().unwrap();
    assert!(!profile.summary.is_empty());
    assert!(!profile.experience.is_empty());
    assert!(!profile.education.is_empty());
    assert!(!profile.skills.is_empty());
}

#[test]
fn experience_entries_carry_highlights() {
    let profile = Profile::embedded().unwrap();
    for entry in &profile.experience {
        assert!(!entry.role.is_empty());
        assert!(!entry.highlights.is_empty(), "{} has no highlights", entry.role);
    }
}

#[test]
fn profile_helper_returns_embedded_content() {
    assert_eq!(profile(), Profile::embedded().unwrap());
}

#[test]
fn profile_round_trips_through_json() {
    let profile = Profile::embedded().unwrap();
    let raw = serde_json::to_string(&profile).unwrap();
    let back: Profile = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, profile);
}
