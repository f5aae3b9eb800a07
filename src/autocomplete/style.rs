//! Styling for the autocomplete suggestion list.
//!
//! All defaults use `AdaptiveColor` so the widget reads well on both light
//! and dark terminal themes. The emphasis style is what the highlighter
//! wraps query hits in; swap it out to change how matches stand out.

use lipgloss_extras::prelude::*;

/// Styles for every visual element of the suggestion list.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::AutocompleteStyles;
/// use lipgloss_extras::prelude::*;
///
/// let mut styles = AutocompleteStyles::default();
/// styles.emphasis = Style::new().underline(true);
/// ```
#[derive(Debug, Clone)]
pub struct AutocompleteStyles {
    /// Style wrapped around the whole rendered list. Unstyled by default;
    /// set a border or background here to frame the dropdown.
    pub frame: Style,
    /// Style for a group header row in grouped mode.
    pub group_header: Style,
    /// Style for a normal suggestion row.
    pub item: Style,
    /// Style for the active (highlighted) suggestion row.
    pub active_item: Style,
    /// Style wrapped around query hits inside suggestion text.
    pub emphasis: Style,
    /// Style for the "no results" row.
    pub no_results: Style,
    /// Style for the trailing "search all results" row.
    pub search_all: Style,
}

impl Default for AutocompleteStyles {
    fn default() -> Self {
        let item = Style::new()
            .foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            })
            .padding(0, 0, 0, 2);
        let active_item = Style::new()
            .bold(true)
            .foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            })
            .padding(0, 0, 0, 1);
        let group_header = Style::new()
            .bold(true)
            .foreground(AdaptiveColor {
                Light: "#043b5c",
                Dark: "#5a9fcf",
            });
        let muted = AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        };
        Self {
            frame: Style::new(),
            group_header,
            item,
            active_item,
            emphasis: Style::new().bold(true),
            no_results: Style::new()
                .foreground(muted.clone())
                .padding(0, 0, 0, 2)
                .italic(true),
            search_all: Style::new().foreground(muted).padding(0, 0, 0, 2),
        }
    }
}
