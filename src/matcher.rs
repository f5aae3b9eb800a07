//! Local matching of a query against an in-memory suggestion pool.
//!
//! Used when the widget is configured with local data instead of a remote
//! fetch function. Matching is case-insensitive substring containment
//! against every field of a suggestion; an item matches when any field
//! matches. The filter is stable: matching items keep their pool order and
//! are never re-sorted.

use crate::suggestion::{Group, Suggestion};

/// Returns the suggestions from `pool` that match `query`, in pool order.
///
/// A suggestion matches when any of its field values contains `query`
/// case-insensitively. An empty query matches nothing.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::matcher::match_flat;
/// use bubbletea_autocomplete::suggestion::Suggestion;
///
/// let pool = vec![
///     Suggestion::new("Southern Screamer"),
///     Suggestion::new("Horned Screamer"),
///     Suggestion::new("Blåmes"),
/// ];
/// let hits = match_flat("sou", &pool);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].title(), "Southern Screamer");
/// ```
pub fn match_flat(query: &str, pool: &[Suggestion]) -> Vec<Suggestion> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    pool.iter()
        .filter(|s| suggestion_matches(&needle, s))
        .cloned()
        .collect()
}

/// Filters each group's items against `query` and drops groups left empty.
///
/// Remaining groups keep their order, and items keep their order within
/// each group.
pub fn match_grouped(query: &str, groups: &[Group]) -> Vec<Group> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    groups
        .iter()
        .filter_map(|g| {
            let items: Vec<Suggestion> = g
                .items
                .iter()
                .filter(|s| suggestion_matches(&needle, s))
                .cloned()
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(Group {
                    title: g.title.clone(),
                    items,
                })
            }
        })
        .collect()
}

/// Whether any field of `s` contains the lowercased `needle`.
fn suggestion_matches(needle: &str, s: &Suggestion) -> bool {
    s.fields().any(|(_, v)| v.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(names: &[&str]) -> Vec<Suggestion> {
        names.iter().map(|n| Suggestion::new(*n)).collect()
    }

    #[test]
    fn test_case_insensitive_substring() {
        let pool = pool(&["Southern Screamer", "Horned Screamer", "Blåmes"]);
        let hits = match_flat("sou", &pool);
        let titles: Vec<&str> = hits.iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["Southern Screamer"]);
    }

    #[test]
    fn test_matches_any_field() {
        let pool = vec![
            Suggestion::new("Great Tit").with_field("latin", "Parus major"),
            Suggestion::new("Blue Tit").with_field("latin", "Cyanistes caeruleus"),
        ];
        let hits = match_flat("parus", &pool);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title(), "Great Tit");
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let pool = pool(&["anything"]);
        assert!(match_flat("", &pool).is_empty());
        let groups = vec![Group::new("A", vec![Suggestion::new("anything")])];
        assert!(match_grouped("", &groups).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let pool = pool(&["screamer b", "other", "screamer a"]);
        let hits = match_flat("screamer", &pool);
        let titles: Vec<&str> = hits.iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["screamer b", "screamer a"]);
    }

    #[test]
    fn test_grouped_drops_empty_groups() {
        let groups = vec![
            Group::new("A", pool(&["foo"])),
            Group::new("B", pool(&["bar"])),
        ];
        let hits = match_grouped("foo", &groups);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "A");
        assert_eq!(hits[0].items.len(), 1);
        assert_eq!(hits[0].items[0].title(), "foo");
    }

    #[test]
    fn test_diacritics_lowercase() {
        let pool = pool(&["Blåmes", "BLÅMES II"]);
        let hits = match_flat("blå", &pool);
        assert_eq!(hits.len(), 2);
    }
}
