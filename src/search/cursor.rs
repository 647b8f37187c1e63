//! Selection bookkeeping for a refreshed result list.
//!
//! The selection is best-effort: after a refresh it stays at the same index
//! when possible and is clamped to the last result otherwise.
//!
//! # Examples
//!
//! ```
//! use opfind::catalog::entry::CatalogEntry;
//! use opfind::search::{ResultCursor, refresh};
//!
//! let catalog = vec![CatalogEntry::new("Subset"), CatalogEntry::new("Subset-Tiles")];
//! let mut cursor = ResultCursor::new();
//!
//! cursor.update(refresh("sub", &catalog));
//! cursor.down();
//! assert_eq!(cursor.selected().map(|e| e.name()), Some("Subset-Tiles"));
//!
//! cursor.update(refresh("subset", &catalog));
//! assert_eq!(cursor.selected_index(), Some(1));
//! ```

use crate::catalog::entry::CatalogEntry;

/// The current results of a search and which of them is selected.
#[derive(Debug, Clone, Default)]
pub struct ResultCursor<'a> {
    results: Vec<&'a CatalogEntry>,
    selected: Option<usize>,
}

impl<'a> ResultCursor<'a> {
    /// Create an empty cursor.
    pub fn new() -> Self {
        ResultCursor::default()
    }

    /// Replace the results, keeping the selection index where possible.
    ///
    /// With a previous selection the new index is `min(previous, len - 1)`;
    /// without one the first result is selected. Empty results clear the
    /// selection.
    pub fn update(&mut self, results: Vec<&'a CatalogEntry>) {
        self.selected = if results.is_empty() {
            None
        } else {
            Some(self.selected.map_or(0, |previous| previous.min(results.len() - 1)))
        };
        self.results = results;
    }

    /// Move the selection one result up.
    pub fn up(&mut self) {
        if self.results.len() <= 1 {
            return;
        }
        if let Some(index) = self.selected.as_mut() {
            *index = index.saturating_sub(1);
        }
    }

    /// Move the selection one result down.
    pub fn down(&mut self) {
        if self.results.len() <= 1 {
            return;
        }
        if let Some(index) = self.selected.as_mut() {
            if *index + 1 < self.results.len() {
                *index += 1;
            }
        }
    }

    /// Index of the selected result.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected result.
    pub fn selected(&self) -> Option<&'a CatalogEntry> {
        self.selected.and_then(|index| self.results.get(index).copied())
    }

    /// Take the selected result, if there is one, and dismiss the list.
    pub fn pick(&mut self) -> Option<&'a CatalogEntry> {
        let picked = self.selected();
        if picked.is_some() {
            self.clear();
        }
        picked
    }

    /// Drop all results and the selection.
    pub fn clear(&mut self) {
        self.results.clear();
        self.selected = None;
    }

    /// Current results in rank order.
    pub fn results(&self) -> &[&'a CatalogEntry] {
        &self.results
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if there are no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<CatalogEntry> {
        names.iter().map(|n| CatalogEntry::new(*n)).collect()
    }

    #[test]
    fn test_first_update_selects_first() {
        let catalog = entries(&["A", "B"]);
        let mut cursor = ResultCursor::new();
        assert_eq!(cursor.selected_index(), None);

        cursor.update(catalog.iter().collect());
        assert_eq!(cursor.selected_index(), Some(0));
        assert_eq!(cursor.selected().map(|e| e.name()), Some("A"));
    }

    #[test]
    fn test_selection_is_clamped() {
        let catalog = entries(&["A", "B", "C", "D"]);
        let mut cursor = ResultCursor::new();

        cursor.update(catalog.iter().collect());
        cursor.down();
        cursor.down();
        cursor.down();
        assert_eq!(cursor.selected_index(), Some(3));

        cursor.update(catalog.iter().take(2).collect());
        assert_eq!(cursor.selected_index(), Some(1));

        cursor.update(catalog.iter().collect());
        assert_eq!(cursor.selected_index(), Some(1));
    }

    #[test]
    fn test_empty_results_reset_selection() {
        let catalog = entries(&["A", "B"]);
        let mut cursor = ResultCursor::new();

        cursor.update(catalog.iter().collect());
        cursor.down();
        cursor.update(Vec::new());
        assert_eq!(cursor.selected_index(), None);
        assert!(cursor.selected().is_none());

        cursor.update(catalog.iter().collect());
        assert_eq!(cursor.selected_index(), Some(0));
    }

    #[test]
    fn test_navigation_bounds() {
        let catalog = entries(&["A", "B"]);
        let mut cursor = ResultCursor::new();

        cursor.update(catalog.iter().collect());
        cursor.up();
        assert_eq!(cursor.selected_index(), Some(0));
        cursor.down();
        cursor.down();
        assert_eq!(cursor.selected_index(), Some(1));
    }

    #[test]
    fn test_single_result_ignores_navigation() {
        let catalog = entries(&["A"]);
        let mut cursor = ResultCursor::new();

        cursor.update(catalog.iter().collect());
        cursor.down();
        cursor.up();
        assert_eq!(cursor.selected_index(), Some(0));
    }

    #[test]
    fn test_pick() {
        let catalog = entries(&["A", "B"]);
        let mut cursor = ResultCursor::new();

        assert!(cursor.pick().is_none());

        cursor.update(catalog.iter().collect());
        cursor.down();
        assert_eq!(cursor.pick().map(|e| e.name()), Some("B"));
        assert!(cursor.is_empty());
        assert_eq!(cursor.selected_index(), None);
    }
}
