//! Autocomplete suggestion widget for `bubbletea-rs` applications.
//!
//! The widget owns a text value and the full suggestion lifecycle around
//! it: deciding when a keystroke should trigger a fetch, debouncing and
//! rate limiting those fetches, matching against a local pool or awaiting
//! a remote source, and presenting the results as a navigable list with a
//! single active row.
//!
//! # Architecture
//!
//! - [`Model`] is the widget itself, driven through `update()` / `view()`
//!   in the usual Elm style.
//! - [`Source`] abstracts where suggestions come from: a static
//!   [`ResultSet`](crate::suggestion::ResultSet) matched in process, or an
//!   async fetch function for remote backends.
//! - [`Config`] carries the tuning knobs (character threshold, debounce
//!   window, item caps, grouping) and can be partially updated at runtime
//!   with [`ConfigUpdate`].
//! - [`SuggestionDelegate`] controls per-row rendering, mirroring the
//!   delegate pattern used by list widgets.
//!
//! # Example
//!
//! ```rust
//! use bubbletea_autocomplete::autocomplete::{Config, Model, Source};
//! use bubbletea_autocomplete::suggestion::{ResultSet, Suggestion};
//! use bubbletea_autocomplete::Component;
//!
//! let pool = ResultSet::Flat(vec![
//!     Suggestion::new("Southern Screamer"),
//!     Suggestion::new("Crested Screamer"),
//! ]);
//! // No debounce window, so local matching is synchronous.
//! let config = Config {
//!     keyboard_delay: None,
//!     ..Config::default()
//! };
//! let mut widget = Model::new(Source::Local(pool), config, 80);
//! widget.focus();
//!
//! // Typing past the threshold opens the list with the matches.
//! widget.set_value("scre");
//! assert!(widget.is_open());
//! assert_eq!(widget.items().len(), 2);
//! ```

mod config;
mod keys;
mod model;
mod rendering;
mod style;
mod types;


pub use config::{Config, ConfigUpdate};
pub use keys::AutocompleteKeyMap;
pub use model::{ListState, Model};
pub use style::AutocompleteStyles;
pub use types::{
    BeforeRequestFn, DefaultDelegate, FetchFn, FetchFuture, FetchResultMsg, OnResultsFn,
    OutsideClickMsg, SelectFn, Source, SuggestionDelegate,
};

use crate::suggestion::ResultSet;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};

/// Creates a widget with default configuration for an 80-column layout.
pub fn new(source: Source) -> Model {
    Model::new(source, Config::default(), 80)
}

impl crate::Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.set_focus(true);
        None
    }

    /// Blurring closes the list and invalidates any pending fetch.
    fn blur(&mut self) {
        self.set_focus(false);
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let model = Model::new(
            Source::Local(ResultSet::Flat(Vec::new())),
            Config::default(),
            80,
        );
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
