//! Key bindings for suggestion list navigation and commit.

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings used by the autocomplete widget.
///
/// Up/Down move the selection, Enter commits it, Escape closes the list.
/// Individual bindings can be replaced or disabled to match an
/// application's conventions.
#[derive(Debug, Clone)]
pub struct AutocompleteKeyMap {
    /// Move the selection up one row.
    pub prev_item: key::Binding,
    /// Move the selection down one row.
    pub next_item: key::Binding,
    /// Commit the highlighted suggestion.
    pub commit: key::Binding,
    /// Close the suggestion list.
    pub close: key::Binding,
}

impl Default for AutocompleteKeyMap {
    fn default() -> Self {
        Self {
            prev_item: key::Binding::new(vec![KeyCode::Up]).with_help("↑", "previous suggestion"),
            next_item: key::Binding::new(vec![KeyCode::Down]).with_help("↓", "next suggestion"),
            commit: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
            close: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "close"),
        }
    }
}

impl AutocompleteKeyMap {
    /// The bindings worth showing in a compact help line.
    pub fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_item, &self.next_item, &self.commit, &self.close]
    }
}
