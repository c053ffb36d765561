//! Résumé content rendered by the page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page behaviors (theme, reveal, navigation) are content-agnostic; the
//! actual copy lives in `content/profile.json` and is embedded at compile
//! time so the site stays a fully static bundle.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Embedded résumé document.
const PROFILE_JSON: &str = include_str!("../content/profile.json");

/// Top-level résumé content.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub summary: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillGroup>,
}

/// One role in the experience section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub highlights: Vec<String>,
}

/// One entry in the education section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub period: String,
}

/// One labelled group in the skills section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub label: String,
    pub items: Vec<String>,
}

impl Profile {
    /// Parse the embedded résumé document.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the embedded document is malformed.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        serde_json::from_str(PROFILE_JSON)
    }
}

/// The profile the page renders. A malformed embedded document degrades to
/// an empty profile instead of failing the mount.
pub fn profile() -> Profile {
    match Profile::embedded() {
        Ok(profile) => profile,
        Err(_err) => {
            #[cfg(feature = "csr")]
            log::warn!("embedded profile is invalid, rendering empty page: {_err}");
            Profile::default()
        }
    }
}
