#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-autocomplete/")]

//! # bubbletea-autocomplete
//!
//! An autocomplete suggestion widget for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs), following the
//! Elm Architecture pattern with `update()` and `view()` methods.
//!
//! ## Overview
//!
//! The widget manages the complete suggestion lifecycle around a text
//! value: it decides when a keystroke should trigger a fetch, debounces
//! keystroke bursts and rate-limits remote requests, matches locally or
//! awaits an asynchronous source, discards stale responses, and presents
//! the results as a keyboard-navigable list with query hits emphasized.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_autocomplete::prelude::*;
//!
//! let pool = ResultSet::Flat(vec![
//!     Suggestion::new("Blåmes"),
//!     Suggestion::new("Blåhake"),
//!     Suggestion::new("Talgoxe"),
//! ]);
//! // With no debounce window, local matching completes inside update().
//! let config = Config {
//!     keyboard_delay: None,
//!     ..Config::default()
//! };
//! let mut widget = Autocomplete::new(Source::Local(pool), config, 80);
//! widget.focus();
//!
//! widget.set_value("blå");
//! assert!(widget.is_open());
//! assert_eq!(widget.items().len(), 2);
//! ```
//!
//! ## Remote Sources
//!
//! A [`Source::Remote`](autocomplete::Source) wraps an async fetch
//! function. The widget returns fetch work as commands for the runtime to
//! execute, and routes completed fetches back through `update()` as
//! [`FetchResultMsg`](autocomplete::FetchResultMsg) values, tagged so that
//! slow responses for superseded queries are dropped instead of
//! overwriting fresher results.
//!
//! ## Modules
//!
//! - [`autocomplete`]: the widget itself, with its model, configuration,
//!   styles, key bindings, and render delegate
//! - [`suggestion`]: the data model of suggestions, groups, and result sets
//! - [`matcher`]: local case-insensitive substring matching
//! - [`highlight`]: query-hit emphasis over suggestion fields
//! - [`debounce`]: debounce and throttle timing built on runtime ticks
//! - [`selection`]: the keyboard selection cursor
//! - [`key`]: type-safe key bindings with help metadata
//! - [`error`]: the widget's error type

pub mod autocomplete;
pub mod debounce;
pub mod error;
pub mod highlight;
pub mod key;
pub mod matcher;
pub mod selection;
pub mod suggestion;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component receives keyboard input; a blurred one does not.
/// For the autocomplete widget, blurring also closes the suggestion list
/// and invalidates any pending fetch, matching the convention that a
/// suggestion list never outlives its field's focus.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::prelude::*;
///
/// let mut widget = autocomplete_new(Source::Local(ResultSet::Flat(vec![])));
/// assert!(!widget.focused());
///
/// widget.focus();
/// assert!(widget.focused());
///
/// widget.blur();
/// assert!(!widget.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for initialization tasks the runtime should
    /// execute.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use autocomplete::{
    new as autocomplete_new, AutocompleteKeyMap, AutocompleteStyles, Config, ConfigUpdate,
    DefaultDelegate, FetchFn, FetchFuture, FetchResultMsg, ListState, Model as Autocomplete,
    OutsideClickMsg, SelectFn, Source, SuggestionDelegate,
};
pub use error::Error;
pub use key::{Binding, Help as KeyHelp};
pub use suggestion::{Group, ResultSet, Suggestion, TITLE_FIELD};

/// Prelude module for convenient imports.
///
/// Re-exports the types most applications need, so a single
/// `use bubbletea_autocomplete::prelude::*;` covers the common cases.
pub mod prelude {
    pub use crate::autocomplete::{
        new as autocomplete_new, AutocompleteKeyMap, AutocompleteStyles, Config, ConfigUpdate,
        DefaultDelegate, FetchFn, FetchFuture, FetchResultMsg, ListState, Model as Autocomplete,
        OutsideClickMsg, SelectFn, Source, SuggestionDelegate,
    };
    pub use crate::error::Error;
    pub use crate::highlight::{highlight, match_ranges};
    pub use crate::key::Binding;
    pub use crate::suggestion::{Group, ResultSet, Suggestion};
    pub use crate::Component;
}
