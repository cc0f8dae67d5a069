//! Click-driven selection state for map surfaces.

/// Selection owned by one map surface: nothing, or exactly one record id.
///
/// All mutation goes through [`Selection::click`], which enforces the
/// toggle/switch transitions. A held id may go stale if the backing data
/// changes; consumers resolve it at render time and treat a miss as no
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    /// Start with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a click on `id`: select it when nothing is selected, clear it
    /// when it is already the selection, or switch straight to it when
    /// another id is selected.
    pub fn click(&mut self, id: &str) {
        if self.is_selected(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let selection = Selection::new();
        assert!(selection.selected_id().is_none());
        assert!(!selection.is_selected("zone1"));
    }

    #[test]
    fn test_click_selects() {
        let mut selection = Selection::new();
        selection.click("zone1");
        assert_eq!(selection.selected_id(), Some("zone1"));
        assert!(selection.is_selected("zone1"));
        assert!(!selection.is_selected("zone2"));
    }

    #[test]
    fn test_second_click_toggles_off() {
        let mut selection = Selection::new();
        selection.click("zone1");
        selection.click("zone1");
        assert!(selection.selected_id().is_none());
    }

    #[test]
    fn test_click_other_switches_directly() {
        // No intermediate empty state when moving between markers.
        let mut selection = Selection::new();
        selection.click("zone1");
        selection.click("zone2");
        assert_eq!(selection.selected_id(), Some("zone2"));
    }

    #[test]
    fn test_toggle_then_reselect() {
        let mut selection = Selection::new();
        selection.click("zone1");
        selection.click("zone1");
        selection.click("zone1");
        assert_eq!(selection.selected_id(), Some("zone1"));
    }
}
