//! Application message types.
//!
//! All rendering-layer events and actions are represented as messages in the
//! Elm architecture style; `App::update` is the single place state changes.

use crate::filter::ClassFilter;
use crate::model::Scene;

/// Messages that can be sent to update application state.
#[derive(Debug, Clone)]
pub enum Message {
    /// Startup load completed
    SceneLoaded(Scene),
    /// Startup load failed; the reason is the stringified underlying error
    LoadFailed(String),

    /// A detection was clicked, on the map or in the sidebar
    DetectionClicked(String),

    /// Class filter changed
    ClassFilterChanged(ClassFilter),
    /// Confidence threshold changed
    MinConfidenceChanged(f64),
    /// Activity overlay toggled
    ActivityToggled(bool),
}
