//! Core types for the autocomplete widget: suggestion sources, callbacks,
//! runtime messages, and the render delegate.

use super::Model;
use crate::error::Error;
use crate::suggestion::{ResultSet, Suggestion};
use bubbletea_rs::Cmd;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by a remote fetch function.
pub type FetchFuture = Pin<Box<dyn Future<Output = Result<ResultSet, Error>> + Send>>;

/// Caller-supplied asynchronous transport.
///
/// Invoked with the query and the merged request parameters (the
/// configured extras plus the query itself under the configured query
/// property). The transport decides what "get" or "post" means; the widget
/// only awaits the resulting [`ResultSet`].
pub type FetchFn = Arc<dyn Fn(String, HashMap<String, String>) -> FetchFuture + Send + Sync>;

/// Selection callback, invoked synchronously at commit time.
///
/// Receives the committed index into the flattened items and the raw,
/// pre-highlight suggestion. The suggestion is `None` when the trailing
/// "search all results" row was committed, since that row is synthetic.
pub type SelectFn = Arc<dyn Fn(usize, Option<&Suggestion>) -> Option<Cmd> + Send + Sync>;

/// Observer invoked just before a fetch dispatches, with the query.
pub type BeforeRequestFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Observer invoked with raw results before normalization.
pub type OnResultsFn = Arc<dyn Fn(&ResultSet) + Send + Sync>;

/// Where suggestions come from.
pub enum Source {
    /// A static in-memory pool, matched locally on every query.
    Local(ResultSet),
    /// A remote fetch function, dispatched per query.
    Remote(FetchFn),
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Local(pool) => f.debug_tuple("Local").field(&pool.len()).finish(),
            Source::Remote(_) => f.debug_tuple("Remote").finish(),
        }
    }
}

/// Message carrying a completed fetch back into the update loop.
///
/// Tagged with the owning widget's id, the dispatch generation, and the
/// query the fetch was issued for. The widget discards messages whose
/// generation is stale (the list was closed or a newer fetch went out) or
/// whose query no longer matches the field value, so slow responses can
/// never overwrite fresher results.
#[derive(Debug)]
pub struct FetchResultMsg {
    /// Id of the widget this fetch belongs to.
    pub id: i64,
    /// Dispatch generation at the time the fetch went out.
    pub generation: u64,
    /// The query the fetch was issued for.
    pub query: String,
    /// The fetched result set, or the transport failure.
    pub result: Result<ResultSet, Error>,
}

/// Notifies the widget that a press landed outside its list.
///
/// Emitted by whatever owns the surrounding layout; a page-level
/// coordinator can hit-test the press once and send this to the widget
/// whose list is open.
#[derive(Debug, Clone, Copy)]
pub struct OutsideClickMsg;

/// Controls how a single suggestion row is rendered.
///
/// The delegate receives the display copy of the suggestion, already run
/// through hit emphasis when that is enabled, plus the row's index in the
/// flattened sequence. Styling for the active row is the delegate's
/// responsibility; exactly one row is active at a time.
pub trait SuggestionDelegate {
    /// Renders one suggestion row.
    fn render(&self, m: &Model, index: usize, item: &Suggestion) -> String;
}

/// Renders the title field, honoring the active selection.
///
/// A per-item template override is rendered as `"{template}: {title}"` so
/// hosts experimenting with custom row kinds can see the override routed
/// through; real applications supply their own delegate for anything
/// fancier.
#[derive(Debug, Clone, Default)]
pub struct DefaultDelegate;

impl DefaultDelegate {
    /// Creates the default delegate.
    pub fn new() -> Self {
        Self
    }
}

impl SuggestionDelegate for DefaultDelegate {
    fn render(&self, m: &Model, index: usize, item: &Suggestion) -> String {
        let style = if m.selection_index() == Some(index) {
            &m.styles.active_item
        } else {
            &m.styles.item
        };
        match item.template() {
            Some(template) => style.render(&format!("{}: {}", template, item.title())),
            None => style.render(item.title()),
        }
    }
}
