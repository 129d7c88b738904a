//! Detection selection state.
//!
//! A single nullable selected id with toggle semantics: clicking the active
//! selection clears it, clicking another switches to it. In-memory session
//! state only; resets on reload.

/// Selection state machine. Initial state is always unselected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected id, if any.
    ///
    /// The id may reference a detection that has since been filtered out;
    /// the view binding treats an unresolvable id as no effective selection.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Apply a click on `id`: select it, toggle it off when it was already
    /// selected, or switch to it from another selection.
    pub fn toggle(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
    }

    /// Drop any selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_unselected() {
        assert_eq!(Selection::new().selected(), None);
    }

    #[test]
    fn test_select_from_unselected() {
        let mut selection = Selection::new();
        selection.toggle("a");
        assert_eq!(selection.selected(), Some("a"));
    }

    #[test]
    fn test_toggle_same_id_clears() {
        let mut selection = Selection::new();
        selection.toggle("a");
        selection.toggle("a");
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_toggle_other_id_switches() {
        let mut selection = Selection::new();
        selection.toggle("a");
        selection.toggle("b");
        assert_eq!(selection.selected(), Some("b"));
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.toggle("a");
        selection.clear();
        assert_eq!(selection.selected(), None);
    }
}
