//! Suggestion data model: items, groups, and result sets.
//!
//! A [`Suggestion`] is an ordered set of named string fields. By convention
//! one field is called `title` and carries the primary display text, but any
//! number of additional fields (subtitles, identifiers, URLs) may be
//! attached; local matching and highlighting consider every field.
//!
//! Fetched results arrive as a [`ResultSet`], either a flat ordered list of
//! suggestions or an ordered list of named [`Group`]s. The widget flattens a
//! result set into the single selectable sequence used for keyboard
//! navigation; in grouped mode the per-group item cap applies before
//! concatenation.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_autocomplete::suggestion::{Suggestion, ResultSet};
//!
//! let items = vec![
//!     Suggestion::new("Southern Screamer"),
//!     Suggestion::new("Horned Screamer").with_field("region", "South America"),
//! ];
//! let results = ResultSet::Flat(items);
//! assert_eq!(results.flatten(100).len(), 2);
//! ```

/// The conventional name of the primary display field.
pub const TITLE_FIELD: &str = "title";

/// A single selectable suggestion.
///
/// Fields keep their insertion order so rendering is deterministic. An
/// optional template override names a delegate-specific render template for
/// this item alone; the override is opaque to the widget and is never
/// touched by highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    fields: Vec<(String, String)>,
    template: Option<String>,
}

impl Suggestion {
    /// Creates a suggestion with the given title text.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            fields: vec![(TITLE_FIELD.to_string(), title.into())],
            template: None,
        }
    }

    /// Adds or replaces a named field, preserving field order.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
        self
    }

    /// Sets a per-item render template override for the delegate.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Returns the primary display text (the `title` field), or the first
    /// field's value when no `title` field exists.
    pub fn title(&self) -> &str {
        self.get(TITLE_FIELD)
            .or_else(|| self.fields.first().map(|(_, v)| v.as_str()))
            .unwrap_or("")
    }

    /// Returns the value of a named field, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// The per-item render template override, if any.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Builds a copy with each field value replaced by `f(name, value)`.
    ///
    /// The template override is carried over untouched. Used by the
    /// highlighter to produce a transformed copy without mutating the
    /// original, since local pools are reused across queries.
    pub fn map_fields(&self, mut f: impl FnMut(&str, &str) -> String) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .map(|(n, v)| (n.clone(), f(n, v)))
                .collect(),
            template: self.template.clone(),
        }
    }
}

/// A named group of suggestions, used in grouped mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Group header text.
    pub title: String,
    /// Suggestions belonging to this group, in display order.
    pub items: Vec<Suggestion>,
}

impl Group {
    /// Creates a group with the given title and items.
    pub fn new(title: impl Into<String>, items: Vec<Suggestion>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// A raw fetch result: a flat list of suggestions or an ordered list of
/// groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSet {
    /// Ungrouped, ordered suggestions.
    Flat(Vec<Suggestion>),
    /// Ordered groups, each with its own ordered suggestions.
    Grouped(Vec<Group>),
}

impl ResultSet {
    /// A short label for the shape, used in error reporting.
    pub fn shape(&self) -> &'static str {
        match self {
            ResultSet::Flat(_) => "flat",
            ResultSet::Grouped(_) => "grouped",
        }
    }

    /// Total number of suggestions across all groups, before any cap.
    pub fn len(&self) -> usize {
        match self {
            ResultSet::Flat(items) => items.len(),
            ResultSet::Grouped(groups) => groups.iter().map(|g| g.items.len()).sum(),
        }
    }

    /// Whether the result set holds no suggestions at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens into the single selectable sequence.
    ///
    /// Flat mode caps the whole list at `max_items`. Grouped mode caps each
    /// group at `max_items` and concatenates the capped groups in order, so
    /// the cap is per group rather than global.
    pub fn flatten(&self, max_items: usize) -> Vec<Suggestion> {
        match self {
            ResultSet::Flat(items) => items.iter().take(max_items).cloned().collect(),
            ResultSet::Grouped(groups) => groups
                .iter()
                .flat_map(|g| g.items.iter().take(max_items))
                .cloned()
                .collect(),
        }
    }

    /// Returns the groups with each group's items capped at `max_items`.
    ///
    /// Only meaningful for grouped result sets; a flat set yields no groups.
    pub fn capped_groups(&self, max_items: usize) -> Vec<Group> {
        match self {
            ResultSet::Flat(_) => Vec::new(),
            ResultSet::Grouped(groups) => groups
                .iter()
                .map(|g| Group {
                    title: g.title.clone(),
                    items: g.items.iter().take(max_items).cloned().collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(names: &[&str]) -> Vec<Suggestion> {
        names.iter().map(|n| Suggestion::new(*n)).collect()
    }

    #[test]
    fn test_title_falls_back_to_first_field() {
        let s = Suggestion::new("Blåmes");
        assert_eq!(s.title(), "Blåmes");

        let s = Suggestion {
            fields: vec![("name".to_string(), "Pilfink".to_string())],
            template: None,
        };
        assert_eq!(s.title(), "Pilfink");
    }

    #[test]
    fn test_with_field_replaces_existing() {
        let s = Suggestion::new("a").with_field("title", "b");
        assert_eq!(s.title(), "b");
        assert_eq!(s.fields().count(), 1);
    }

    #[test]
    fn test_flatten_flat_caps_whole_list() {
        let set = ResultSet::Flat(pool(&["a", "b", "c", "d"]));
        let flat = set.flatten(2);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].title(), "a");
        assert_eq!(flat[1].title(), "b");
    }

    #[test]
    fn test_flatten_grouped_caps_per_group() {
        let set = ResultSet::Grouped(vec![
            Group::new("A", pool(&["a1", "a2", "a3"])),
            Group::new("B", pool(&["b1", "b2"])),
        ]);
        let flat = set.flatten(2);
        let titles: Vec<&str> = flat.iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["a1", "a2", "b1", "b2"]);
    }

    #[test]
    fn test_map_fields_preserves_template() {
        let s = Suggestion::new("foo").with_template("fancy");
        let mapped = s.map_fields(|_, v| v.to_uppercase());
        assert_eq!(mapped.title(), "FOO");
        assert_eq!(mapped.template(), Some("fancy"));
        // Source untouched.
        assert_eq!(s.title(), "foo");
    }

    #[test]
    fn test_len_and_is_empty() {
        let set = ResultSet::Grouped(vec![Group::new("A", vec![])]);
        assert!(set.is_empty());
        let set = ResultSet::Flat(pool(&["x"]));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }
}
