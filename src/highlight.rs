//! Query-hit emphasis for suggestion display fields.
//!
//! Given a matched suggestion and the query that produced it, the
//! highlighter returns a transformed copy in which every case-insensitive
//! occurrence of the full query, or of any usable word of the query, is
//! wrapped in an emphasis style. The original suggestion is never mutated:
//! local pools are reused across queries, so transformation is strictly
//! copy-on-write.
//!
//! A query word is usable when, after stripping non-alphanumeric
//! characters, it is non-empty. The full query and all usable words are
//! matched in a single combined pass so overlapping and adjacent hits
//! collapse into one emphasized span instead of nesting markers.

use crate::suggestion::Suggestion;
use lipgloss_extras::prelude::*;

/// Returns a copy of `item` with query hits in every field wrapped in
/// `emphasis`.
///
/// Fields are matched case-insensitively against the full query and each
/// usable query word. A query that is empty or reduces to zero usable words
/// yields an unchanged copy. The per-item template override is exempt from
/// transformation.
pub fn highlight(item: &Suggestion, query: &str, emphasis: &Style) -> Suggestion {
    let needles = needles(query);
    if needles.is_empty() {
        return item.clone();
    }
    item.map_fields(|_, value| {
        let ranges = match_ranges_with(value, &needles);
        apply_emphasis(value, &ranges, emphasis)
    })
}

/// Computes the emphasized character ranges for `text` under `query`.
///
/// Ranges are half-open `(start, end)` pairs of character indices, sorted
/// and non-overlapping. Exposed separately so delegates can run their own
/// styling over the same hit positions.
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    match_ranges_with(text, &needles(query))
}

/// The lowercased candidate substrings for a query: the full query plus
/// every whitespace-delimited word stripped of non-alphanumerics.
fn needles(query: &str) -> Vec<Vec<char>> {
    let mut out: Vec<Vec<char>> = Vec::new();
    if !query.is_empty() {
        out.push(lower_chars(query));
    }
    for word in query.split_whitespace() {
        let cleaned: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
        if cleaned.is_empty() {
            continue;
        }
        let cleaned = lower_chars(&cleaned);
        if !out.contains(&cleaned) {
            out.push(cleaned);
        }
    }
    out
}

/// Per-character lowercasing that keeps a 1:1 index mapping with the
/// source text, so hit ranges computed on the lowered form apply directly
/// to the original.
fn lower_chars(s: &str) -> Vec<char> {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

fn match_ranges_with(text: &str, needles: &[Vec<char>]) -> Vec<(usize, usize)> {
    if needles.is_empty() {
        return Vec::new();
    }
    let haystack = lower_chars(text);
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for needle in needles {
        if needle.is_empty() || needle.len() > haystack.len() {
            continue;
        }
        for start in 0..=(haystack.len() - needle.len()) {
            if haystack[start..start + needle.len()] == needle[..] {
                ranges.push((start, start + needle.len()));
            }
        }
    }
    merge_ranges(ranges)
}

/// Merges overlapping ranges into maximal spans.
fn merge_ranges(mut ranges: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    if ranges.is_empty() {
        return ranges;
    }
    ranges.sort_unstable();
    let mut merged = vec![ranges[0]];
    for (start, end) in ranges.into_iter().skip(1) {
        let last = merged.last_mut().unwrap();
        if start <= last.1 {
            last.1 = last.1.max(end);
        } else {
            merged.push((start, end));
        }
    }
    merged
}

/// Rebuilds `text` with each range rendered through `emphasis`.
///
/// Segments outside the ranges pass through untouched, so a field with no
/// hits is returned byte-for-byte identical.
fn apply_emphasis(text: &str, ranges: &[(usize, usize)], emphasis: &Style) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut pos = 0;
    for &(start, end) in ranges {
        if pos < start {
            out.extend(&chars[pos..start]);
        }
        let hit: String = chars[start..end].iter().collect();
        out.push_str(&emphasis.render(&hit));
        pos = end;
    }
    if pos < chars.len() {
        out.extend(&chars[pos..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_full_query() {
        let ranges = match_ranges("Southern Screamer", "sou");
        assert_eq!(ranges, vec![(0, 3)]);
    }

    #[test]
    fn test_ranges_diacritics() {
        let ranges = match_ranges("Blåmes", "blå");
        assert_eq!(ranges, vec![(0, 3)]);
        assert!(match_ranges("Pilfink", "blå").is_empty());
    }

    #[test]
    fn test_ranges_each_word_matches() {
        // Both words hit independently of the full query.
        let ranges = match_ranges("red-backed shrike", "shrike red");
        assert_eq!(ranges, vec![(0, 3), (11, 17)]);
    }

    #[test]
    fn test_word_stripping_non_alphanumerics() {
        // "tit," strips to "tit"; the bare comma word strips to nothing.
        let ranges = match_ranges("Great Tit", "tit, ,");
        assert_eq!(ranges, vec![(6, 9)]);
    }

    #[test]
    fn test_overlapping_hits_merge() {
        let ranges = match_ranges("screamer", "scream creamer");
        assert_eq!(ranges, vec![(0, 8)]);
    }

    #[test]
    fn test_no_usable_words_returns_unchanged_copy() {
        let item = Suggestion::new("anything");
        let out = highlight(&item, "  ,. ", &Style::new().bold(true));
        assert_eq!(out, item);
    }

    #[test]
    fn test_non_matching_field_unchanged() {
        let item = Suggestion::new("Pilfink").with_field("latin", "Passer montanus");
        let out = highlight(&item, "blå", &Style::new().bold(true));
        // No hits anywhere, so every field passes through verbatim.
        assert_eq!(out.title(), "Pilfink");
        assert_eq!(out.get("latin"), Some("Passer montanus"));
    }

    #[test]
    fn test_source_item_not_mutated() {
        let item = Suggestion::new("Blåmes");
        let _ = highlight(&item, "blå", &Style::new().bold(true));
        assert_eq!(item.title(), "Blåmes");
    }

    #[test]
    fn test_template_override_carried() {
        let item = Suggestion::new("Blåmes").with_template("custom-row");
        let out = highlight(&item, "blå", &Style::new().bold(true));
        assert_eq!(out.template(), Some("custom-row"));
    }
}
