//! List rendering: groups, rows, and the informational rows.

use super::model::{ListState, Model};
use crate::highlight::highlight;
use crate::suggestion::Suggestion;
use unicode_width::UnicodeWidthChar;

impl Model {
    /// Renders the suggestion list, one row per line.
    ///
    /// Returns an empty string while the list is closed. An open list with
    /// no items renders nothing unless the no-results row is enabled.
    pub fn view(&self) -> String {
        if self.state() != ListState::Open {
            return String::new();
        }

        let mut lines: Vec<String> = Vec::new();

        if self.items().is_empty() {
            if self.config.show_no_results {
                let text = truncate_to_width(
                    &format!("No results for \"{}\"", self.value()),
                    self.width,
                );
                lines.push(self.styles.no_results.render(&text));
            }
        } else if self.config.grouped {
            let mut index = 0usize;
            for group in self.groups() {
                let header = truncate_to_width(&group.title, self.width);
                lines.push(self.styles.group_header.render(&header));
                for item in &group.items {
                    lines.push(self.render_item(index, item));
                    index += 1;
                }
            }
        } else {
            for (index, item) in self.items().iter().enumerate() {
                lines.push(self.render_item(index, item));
            }
        }

        if self.config.show_search_all {
            lines.push(self.render_search_all());
        }

        if lines.is_empty() {
            return String::new();
        }
        self.styles.frame.render(&lines.join("\n"))
    }

    fn render_item(&self, index: usize, item: &Suggestion) -> String {
        let display = if self.config.mark_as_bold {
            highlight(item, self.value(), &self.styles.emphasis)
        } else {
            item.clone()
        };
        self.delegate.render(self, index, &display)
    }

    /// The trailing "show all results" row sits one past the last item and
    /// participates in selection like any other row.
    fn render_search_all(&self) -> String {
        let text = truncate_to_width(
            &format!("Show all results for \"{}\"", self.value()),
            self.width,
        );
        if self.selection_index() == Some(self.items().len()) {
            self.styles.active_item.render(&text)
        } else {
            self.styles.search_all.render(&text)
        }
    }
}

/// Truncates plain text to at most `max` terminal columns, appending an
/// ellipsis when anything was cut. Measured in display columns so wide
/// characters count double.
pub(super) fn truncate_to_width(text: &str, max: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max || max == 0 {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_cuts_and_marks() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK glyph occupies two columns.
        assert_eq!(truncate_to_width("日本語テキスト", 6), "日本…");
    }
}
