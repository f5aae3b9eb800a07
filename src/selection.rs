//! Keyboard selection cursor for the rendered suggestion list.
//!
//! The cursor is either unset (nothing highlighted) or at an index into the
//! flattened item sequence. Moving down from unset lands on the first item;
//! moving up from the first item returns to unset rather than clamping at
//! zero, so a user can always step back out of the list. Downward movement
//! saturates at the upper bound with no wraparound.
//!
//! When a trailing "search all results" row is configured, the upper bound
//! sits one past the last real item so the cursor can land on that row.

/// The current selection within the flattened suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No item is highlighted.
    #[default]
    Unset,
    /// The item at this index is highlighted.
    At(usize),
}

impl Selection {
    /// Moves the selection down one step.
    ///
    /// From `Unset` this selects index 0. Movement saturates at
    /// `upper_bound`; with no selectable rows (`upper_bound` is `None`) the
    /// selection stays unset.
    pub fn next(&mut self, upper_bound: Option<usize>) {
        let Some(bound) = upper_bound else {
            *self = Selection::Unset;
            return;
        };
        *self = match *self {
            Selection::Unset => Selection::At(0),
            Selection::At(i) => Selection::At((i + 1).min(bound)),
        };
    }

    /// Moves the selection up one step.
    ///
    /// From index 0 this returns to `Unset`; from `Unset` it is a no-op.
    pub fn prev(&mut self) {
        *self = match *self {
            Selection::Unset | Selection::At(0) => Selection::Unset,
            Selection::At(i) => Selection::At(i - 1),
        };
    }

    /// Clears the selection. Called on every new result set and on close.
    pub fn reset(&mut self) {
        *self = Selection::Unset;
    }

    /// The highlighted index, or `None` when unset.
    pub fn index(&self) -> Option<usize> {
        match *self {
            Selection::Unset => None,
            Selection::At(i) => Some(i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_from_unset_selects_first() {
        let mut sel = Selection::Unset;
        sel.next(Some(4));
        assert_eq!(sel, Selection::At(0));
    }

    #[test]
    fn test_next_then_prev_returns_to_unset() {
        let mut sel = Selection::Unset;
        sel.next(Some(4));
        sel.prev();
        assert_eq!(sel, Selection::Unset);
    }

    #[test]
    fn test_next_saturates_at_upper_bound() {
        let mut sel = Selection::Unset;
        for _ in 0..10 {
            sel.next(Some(2));
        }
        assert_eq!(sel, Selection::At(2));
    }

    #[test]
    fn test_prev_from_unset_is_noop() {
        let mut sel = Selection::Unset;
        sel.prev();
        assert_eq!(sel, Selection::Unset);
    }

    #[test]
    fn test_next_with_no_rows_stays_unset() {
        let mut sel = Selection::Unset;
        sel.next(None);
        assert_eq!(sel, Selection::Unset);
    }

    #[test]
    fn test_down_down_up_steps_back_to_first() {
        let mut sel = Selection::Unset;
        sel.next(Some(4));
        sel.next(Some(4));
        assert_eq!(sel.index(), Some(1));
        sel.prev();
        assert_eq!(sel.index(), Some(0));
    }

    #[test]
    fn test_reset_clears() {
        let mut sel = Selection::At(3);
        sel.reset();
        assert_eq!(sel, Selection::Unset);
    }
}
