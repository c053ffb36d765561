//! Page sections and active-navigation selection.
//!
//! DESIGN
//! ======
//! The page has four fixed sections in document order. A single intersection
//! observer reports their visibility; each callback batch picks the most
//! visible intersecting section as the navigation highlight. An empty batch
//! keeps the previous highlight so fast scrolls through gaps do not flicker.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// The four fixed page sections, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionId {
    #[default]
    Summary,
    Experience,
    Education,
    Skills,
}

/// Visibility thresholds at which the section observer reports, so callbacks
/// fire at multiple granularities while scrolling.
pub const THRESHOLDS: [f64; 3] = [0.3, 0.5, 0.7];

/// Class marking the active navigation link.
pub const ACTIVE_CLASS: &str = "active";

impl SectionId {
    /// All sections in document order.
    pub const ALL: [Self; 4] = [Self::Summary, Self::Experience, Self::Education, Self::Skills];

    /// Element id, also the fragment each navigation link targets.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
        }
    }

    /// Navigation link caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Skills => "Skills",
        }
    }

    /// Resolve a URL fragment (or element id) to a section.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == fragment)
    }

    /// Position in document order, used as the deterministic tie-break.
    fn order(self) -> usize {
        match self {
            Self::Summary => 0,
            Self::Experience => 1,
            Self::Education => 2,
            Self::Skills => 3,
        }
    }
}

/// One intersecting section from an observer callback batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionReport {
    pub id: SectionId,
    pub ratio: f64,
}

/// Pick the section to highlight from a callback batch.
///
/// The highest intersection ratio wins; exact ties break to the earlier
/// section in document order. An empty batch returns `None`, meaning the
/// previous highlight stays.
pub fn select_active(reports: &[SectionReport]) -> Option<SectionId> {
    reports
        .iter()
        .min_by(|a, b| {
            b.ratio
                .total_cmp(&a.ratio)
                .then(a.id.order().cmp(&b.id.order()))
        })
        .map(|report| report.id)
}
