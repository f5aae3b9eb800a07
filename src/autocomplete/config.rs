//! Widget configuration and partial updates.
//!
//! Settings are resolved once when the widget is created by merging caller
//! overrides onto [`Config::default`]. After construction the only mutation
//! path is [`Config::apply`], which shallow-merges an explicit
//! [`ConfigUpdate`]. The widget itself lowers `max_items` on narrow
//! terminals and restores it on wide ones, remembering the configured cap
//! on its own side.

use std::collections::HashMap;
use std::time::Duration;

/// Configuration for an autocomplete widget.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::Config;
/// use std::time::Duration;
///
/// let config = Config {
///     min_chars: 3,
///     keyboard_delay: Some(Duration::from_millis(150)),
///     ..Config::default()
/// };
/// assert_eq!(config.max_items, 100);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum number of characters before a fetch is triggered.
    pub min_chars: usize,
    /// Whether to emphasize query hits in rendered suggestions.
    pub mark_as_bold: bool,
    /// Whether results are partitioned into named groups.
    pub grouped: bool,
    /// Name of the query parameter handed to the fetch function.
    pub query_property: String,
    /// Extra parameters handed to the fetch function on every request.
    pub query_parameters: HashMap<String, String>,
    /// Request method hint for the fetch function.
    pub method: String,
    /// Maximum rendered items (per group in grouped mode).
    pub max_items: usize,
    /// Item cap applied on narrow terminals; `None` disables the cap.
    pub max_items_on_mobile: Option<usize>,
    /// Terminal width in columns below which the narrow cap applies.
    pub mobile_width: usize,
    /// Debounce window between a keystroke and the fetch; `None` fetches
    /// on every value-changing keystroke.
    pub keyboard_delay: Option<Duration>,
    /// Minimum interval between remote fetch dispatches; `None` disables
    /// rate limiting.
    pub time_limit: Option<Duration>,
    /// Whether to append a trailing "search all results" row.
    pub show_search_all: bool,
    /// Whether committing a selection closes the list.
    pub close_on_select: bool,
    /// Whether an informational row is rendered when a fetch returns no
    /// suggestions.
    pub show_no_results: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_chars: 2,
            mark_as_bold: true,
            grouped: false,
            query_property: "q".to_string(),
            query_parameters: HashMap::new(),
            method: "get".to_string(),
            max_items: 100,
            max_items_on_mobile: Some(3),
            mobile_width: 80,
            keyboard_delay: Some(Duration::from_millis(300)),
            time_limit: None,
            show_search_all: false,
            close_on_select: true,
            show_no_results: false,
        }
    }
}

impl Config {
    /// Shallow-merges an update: every populated field replaces the
    /// current value, everything else is left alone.
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(v) = update.min_chars {
            self.min_chars = v;
        }
        if let Some(v) = update.mark_as_bold {
            self.mark_as_bold = v;
        }
        if let Some(v) = update.grouped {
            self.grouped = v;
        }
        if let Some(v) = update.query_property {
            self.query_property = v;
        }
        if let Some(v) = update.query_parameters {
            self.query_parameters = v;
        }
        if let Some(v) = update.method {
            self.method = v;
        }
        if let Some(v) = update.max_items {
            self.max_items = v;
        }
        if let Some(v) = update.max_items_on_mobile {
            self.max_items_on_mobile = v;
        }
        if let Some(v) = update.mobile_width {
            self.mobile_width = v;
        }
        if let Some(v) = update.keyboard_delay {
            self.keyboard_delay = v;
        }
        if let Some(v) = update.time_limit {
            self.time_limit = v;
        }
        if let Some(v) = update.show_search_all {
            self.show_search_all = v;
        }
        if let Some(v) = update.close_on_select {
            self.close_on_select = v;
        }
        if let Some(v) = update.show_no_results {
            self.show_no_results = v;
        }
    }
}

/// A partial configuration for [`Config::apply`].
///
/// Unset fields leave the current configuration untouched. Nullable
/// settings are doubly wrapped: the outer `Option` marks "field present",
/// the inner value is the new setting, so a delay can be explicitly
/// cleared with `Some(None)`.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    /// New minimum character threshold.
    pub min_chars: Option<usize>,
    /// New emphasis setting.
    pub mark_as_bold: Option<bool>,
    /// New grouping mode.
    pub grouped: Option<bool>,
    /// New query parameter name.
    pub query_property: Option<String>,
    /// New extra request parameters.
    pub query_parameters: Option<HashMap<String, String>>,
    /// New request method hint.
    pub method: Option<String>,
    /// New item cap.
    pub max_items: Option<usize>,
    /// New narrow-terminal cap.
    pub max_items_on_mobile: Option<Option<usize>>,
    /// New narrow-terminal breakpoint.
    pub mobile_width: Option<usize>,
    /// New debounce window.
    pub keyboard_delay: Option<Option<Duration>>,
    /// New rate-limit budget.
    pub time_limit: Option<Option<Duration>>,
    /// New trailing search-all row setting.
    pub show_search_all: Option<bool>,
    /// New close-on-select behavior.
    pub close_on_select: Option<bool>,
    /// New no-results row setting.
    pub show_no_results: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.min_chars, 2);
        assert!(config.mark_as_bold);
        assert!(!config.grouped);
        assert_eq!(config.query_property, "q");
        assert_eq!(config.max_items, 100);
        assert_eq!(config.max_items_on_mobile, Some(3));
        assert_eq!(config.keyboard_delay, Some(Duration::from_millis(300)));
        assert_eq!(config.time_limit, None);
        assert!(config.close_on_select);
        assert!(!config.show_no_results);
    }

    // Every field is public, so callers can build configurations with
    // functional record update.
    #[test]
    fn test_functional_record_update() {
        let config = Config {
            min_chars: 3,
            mobile_width: 60,
            ..Config::default()
        };
        assert_eq!(config.min_chars, 3);
        assert_eq!(config.mobile_width, 60);
        assert_eq!(config.max_items, 100);
    }

    #[test]
    fn test_apply_shallow_merge() {
        let mut config = Config::default();
        config.apply(ConfigUpdate {
            min_chars: Some(4),
            keyboard_delay: Some(None),
            ..ConfigUpdate::default()
        });
        assert_eq!(config.min_chars, 4);
        assert_eq!(config.keyboard_delay, None);
        // Untouched fields keep their values.
        assert_eq!(config.max_items, 100);
    }

    #[test]
    fn test_apply_replaces_max_items() {
        let mut config = Config::default();
        config.apply(ConfigUpdate {
            max_items: Some(10),
            ..ConfigUpdate::default()
        });
        assert_eq!(config.max_items, 10);
    }
}
