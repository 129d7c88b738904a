//! Detection list filtering and label derivation.
//!
//! Pure, single-pass predicates over the loaded detection list. Filtering
//! never copies detections; it hands out references in input order so list
//! rendering and test comparison stay deterministic.

use std::collections::HashSet;

use crate::model::Detection;

/// Class-label predicate: everything, or one label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassFilter {
    #[default]
    All,
    Label(String),
}

impl ClassFilter {
    pub fn matches(&self, label: &str) -> bool {
        match self {
            ClassFilter::All => true,
            ClassFilter::Label(wanted) => wanted == label,
        }
    }
}

/// Pure UI-session filter state. Not persisted across reloads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub class: ClassFilter,
    pub min_confidence: f64,
    pub show_activity: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The distinct set of class labels present in the loaded detections.
///
/// Order is not part of the contract; callers that display the set sort it
/// themselves for a stable UI.
pub fn distinct_labels(detections: &[Detection]) -> HashSet<String> {
    detections.iter().map(|d| d.label.clone()).collect()
}

/// Apply the compound filter predicate.
///
/// Keeps detections whose label matches the class filter and whose
/// confidence is at least `min_confidence`. Preserves input order.
pub fn apply_filters<'a>(detections: &'a [Detection], filters: &FilterState) -> Vec<&'a Detection> {
    detections
        .iter()
        .filter(|d| filters.class.matches(&d.label))
        .filter(|d| d.confidence >= filters.min_confidence)
        .collect()
}
