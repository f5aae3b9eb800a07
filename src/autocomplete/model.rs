//! Core model and state machine for the autocomplete widget.

use super::config::Config;
use super::keys::AutocompleteKeyMap;
use super::style::AutocompleteStyles;
use super::types::{
    BeforeRequestFn, FetchResultMsg, OnResultsFn, OutsideClickMsg, SelectFn, Source,
    SuggestionDelegate,
};
use crate::debounce::{Admission, DebounceMsg, Debouncer, Throttle, ThrottleMsg};
use crate::error::Error;
use crate::matcher;
use crate::selection::Selection;
use crate::suggestion::{Group, ResultSet, Suggestion};
use bubbletea_rs::{Cmd, KeyMsg, Msg, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Whether the suggestion list is currently rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    /// No list rendered; no items, selection unset.
    #[default]
    Closed,
    /// List rendered with zero or more items.
    Open,
}

/// The autocomplete widget model.
///
/// Owns the field value, the suggestion list lifecycle, fetch scheduling,
/// and keyboard selection. The widget is fed key events (and the timer and
/// fetch messages it schedules for itself) through [`Model::update`] and
/// rendered with [`Model::view`].
///
/// The list is `Closed` until a fetch completes, opens even for an empty
/// result set, and closes on blur, Escape, an outside press, an emptied
/// field, or a committed selection when close-on-select is enabled. Every
/// successful fetch replaces the item sequence wholesale and resets the
/// selection.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::{Config, Model, Source};
/// use bubbletea_autocomplete::suggestion::{ResultSet, Suggestion};
///
/// let pool = ResultSet::Flat(vec![
///     Suggestion::new("Southern Screamer"),
///     Suggestion::new("Horned Screamer"),
/// ]);
/// let widget = Model::new(Source::Local(pool), Config::default(), 80);
/// assert!(!widget.is_open());
/// ```
pub struct Model {
    /// Last error from a fetch or a malformed result set, if any.
    pub err: Option<Error>,
    /// Styling for the rendered list.
    pub styles: AutocompleteStyles,
    /// Key bindings for navigation and commit.
    pub keymap: AutocompleteKeyMap,

    pub(super) config: Config,
    pub(super) source: Source,
    pub(super) delegate: Box<dyn SuggestionDelegate + Send + Sync>,
    pub(super) width: usize,
    /// The configured item cap, remembered so narrowing and widening the
    /// terminal round-trips.
    wide_max_items: usize,

    id: i64,
    /// Bumped on every dispatch and on close; responses from earlier
    /// generations are discarded.
    generation: u64,
    value: String,
    last_query: Option<String>,
    state: ListState,
    items: Vec<Suggestion>,
    groups: Vec<Group>,
    selection: Selection,
    debouncer: Debouncer,
    throttle: Throttle,
    focus: bool,

    on_select: Option<SelectFn>,
    before_request: Option<BeforeRequestFn>,
    on_results: Option<OnResultsFn>,
}

impl Model {
    /// Creates a widget for the given source, configuration, and initial
    /// terminal width.
    pub fn new(source: Source, config: Config, width: usize) -> Self {
        let debouncer = Debouncer::new(config.keyboard_delay);
        let throttle = Throttle::new(config.time_limit);
        let wide_max_items = config.max_items;
        let mut model = Self {
            err: None,
            styles: AutocompleteStyles::default(),
            keymap: AutocompleteKeyMap::default(),
            config,
            source,
            delegate: Box::new(super::types::DefaultDelegate::new()),
            width,
            wide_max_items,
            id: next_id(),
            generation: 0,
            value: String::new(),
            last_query: None,
            state: ListState::Closed,
            items: Vec::new(),
            groups: Vec::new(),
            selection: Selection::Unset,
            debouncer,
            throttle,
            focus: false,
            on_select: None,
            before_request: None,
            on_results: None,
        };
        model.adjust_for_width();
        model
    }

    /// Replaces the render delegate.
    pub fn with_delegate(mut self, delegate: Box<dyn SuggestionDelegate + Send + Sync>) -> Self {
        self.delegate = delegate;
        self
    }

    /// Sets the selection callback invoked at commit time.
    pub fn with_on_select(mut self, f: SelectFn) -> Self {
        self.on_select = Some(f);
        self
    }

    /// Sets the observer invoked just before each fetch dispatch.
    pub fn with_before_request(mut self, f: BeforeRequestFn) -> Self {
        self.before_request = Some(f);
        self
    }

    /// Sets the observer invoked with raw results before normalization.
    pub fn with_on_results(mut self, f: OnResultsFn) -> Self {
        self.on_results = Some(f);
        self
    }

    /// This widget's unique id, carried by its fetch messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The current field value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the suggestion list is currently rendered.
    pub fn is_open(&self) -> bool {
        self.state == ListState::Open
    }

    /// The current list state.
    pub fn state(&self) -> ListState {
        self.state
    }

    /// The flattened, selectable suggestions.
    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    /// The capped groups backing the rendered list in grouped mode.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The highlighted row index, or `None` when the selection is unset.
    pub fn selection_index(&self) -> Option<usize> {
        self.selection.index()
    }

    /// Read access to the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The terminal width the widget is laid out for, in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Shallow-merges a configuration update into the widget.
    ///
    /// Timing changes take effect on the next scheduled fetch; a pending
    /// debounce or deferred dispatch is invalidated so it cannot fire with
    /// the old timing.
    pub fn update_settings(&mut self, update: super::config::ConfigUpdate) {
        if let Some(cap) = update.max_items {
            self.wide_max_items = cap;
        }
        self.config.apply(update);
        self.adjust_for_width();
        self.debouncer = Debouncer::new(self.config.keyboard_delay);
        self.throttle = Throttle::new(self.config.time_limit);
    }

    /// Recomputes the item cap for the current terminal width.
    ///
    /// Below `mobile_width` the cap drops to `max_items_on_mobile` (when
    /// set); at or above it the configured cap is restored.
    fn adjust_for_width(&mut self) {
        self.config.max_items = match self.config.max_items_on_mobile {
            Some(cap) if self.width < self.config.mobile_width => self.wide_max_items.min(cap),
            _ => self.wide_max_items,
        };
    }

    pub(super) fn focused(&self) -> bool {
        self.focus
    }

    pub(super) fn set_focus(&mut self, focus: bool) {
        self.focus = focus;
        if !focus {
            self.close();
        }
    }

    /// Replaces the field value, as when a host application owns the text
    /// input, and runs the fetch-trigger policy on the new value.
    pub fn set_value(&mut self, value: &str) -> Option<Cmd> {
        self.value = value.to_string();
        self.after_edit()
    }

    /// Commits the suggestion at `index`, as when a pointer press resolved
    /// to that row.
    ///
    /// The index one past the last item commits the trailing "search all"
    /// row when that row is configured. An index that resolves to no known
    /// row is a no-op rather than an error, since a press can race a list
    /// replacement.
    pub fn select_at(&mut self, index: usize) -> Option<Cmd> {
        if self.state != ListState::Open {
            return None;
        }
        match self.upper_bound() {
            Some(bound) if index <= bound => self.commit(index),
            _ => None,
        }
    }

    /// Closes the list, clearing items and selection and invalidating any
    /// pending timer fire or in-flight fetch.
    pub fn close(&mut self) {
        self.state = ListState::Closed;
        self.items.clear();
        self.groups.clear();
        self.selection.reset();
        self.debouncer.cancel();
        self.throttle.cancel();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Processes a runtime message.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.width = size.width as usize;
            self.adjust_for_width();
            return None;
        }

        if let Some(fire) = msg.downcast_ref::<DebounceMsg>() {
            if self.debouncer.accepts(fire) {
                return self.dispatch_fetch(fire.query.clone());
            }
            return None;
        }

        if let Some(fire) = msg.downcast_ref::<ThrottleMsg>() {
            if self.throttle.accepts(fire) {
                self.throttle.mark_dispatched();
                return Some(self.fetch_cmd(fire.query.clone()));
            }
            return None;
        }

        if let Some(result) = msg.downcast_ref::<FetchResultMsg>() {
            return self.handle_fetch_result(result);
        }

        if msg.downcast_ref::<OutsideClickMsg>().is_some() {
            if self.is_open() {
                self.close();
            }
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if !self.focus {
                return None;
            }
            return self.handle_key(key_msg);
        }

        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.close.matches(key_msg) {
            self.close();
            return None;
        }
        if self.keymap.prev_item.matches(key_msg) {
            if self.is_open() {
                self.selection.prev();
            }
            return None;
        }
        if self.keymap.next_item.matches(key_msg) {
            if self.is_open() {
                let bound = self.upper_bound();
                self.selection.next(bound);
            }
            return None;
        }
        if self.keymap.commit.matches(key_msg) {
            // An unset selection lets Enter through so the surrounding
            // form can act on it.
            return match self.selection.index() {
                Some(index) => self.commit(index),
                None => None,
            };
        }

        match key_msg.key {
            KeyCode::Char(c)
                if key_msg.modifiers.is_empty() || key_msg.modifiers == KeyModifiers::SHIFT =>
            {
                self.value.push(c);
                self.after_edit()
            }
            KeyCode::Backspace => {
                self.value.pop();
                self.after_edit()
            }
            _ => None,
        }
    }

    /// Runs the fetch-trigger policy after the field value changed.
    fn after_edit(&mut self) -> Option<Cmd> {
        if self.value.is_empty() {
            self.last_query = Some(String::new());
            self.close();
            return None;
        }
        if self.value.chars().count() >= self.config.min_chars && self.value_changed() {
            let query = self.value.clone();
            return match self.debouncer.trigger(query.clone()) {
                Some(cmd) => Some(cmd),
                None => self.dispatch_fetch(query),
            };
        }
        None
    }

    /// Records the value as the latest query if it differs from the one
    /// the last fetch was issued for. Suppresses refetching on keystrokes
    /// that leave the value unchanged.
    fn value_changed(&mut self) -> bool {
        if self.last_query.as_deref() != Some(self.value.as_str()) {
            self.last_query = Some(self.value.clone());
            return true;
        }
        false
    }

    /// Dispatches a fetch for `query`: local pools match synchronously,
    /// remote sources go through the rate limiter.
    fn dispatch_fetch(&mut self, query: String) -> Option<Cmd> {
        match &self.source {
            Source::Local(_) => {
                if let Some(hook) = &self.before_request {
                    hook(&query);
                }
                match self.local_match(&query) {
                    Ok(results) => self.receive_results(results),
                    Err(err) => {
                        self.err = Some(err);
                        None
                    }
                }
            }
            Source::Remote(_) => match self.throttle.admit(query.clone()) {
                Admission::Now => Some(self.fetch_cmd(query)),
                Admission::Deferred(cmd) => Some(cmd),
            },
        }
    }

    /// Builds the asynchronous fetch command for a remote source.
    fn fetch_cmd(&mut self, query: String) -> Cmd {
        if let Some(hook) = &self.before_request {
            hook(&query);
        }
        self.generation = self.generation.wrapping_add(1);
        let Source::Remote(fetch) = &self.source else {
            return Box::pin(async { None });
        };
        let fetch = fetch.clone();
        let mut params = self.config.query_parameters.clone();
        params.insert(self.config.query_property.clone(), query.clone());
        let id = self.id;
        let generation = self.generation;
        Box::pin(async move {
            let result = fetch(query.clone(), params).await;
            Some(Box::new(FetchResultMsg {
                id,
                generation,
                query,
                result,
            }) as Msg)
        })
    }

    /// Matches a query against the local pool, verifying that the pool
    /// shape agrees with the configured mode.
    fn local_match(&self, query: &str) -> Result<ResultSet, Error> {
        let Source::Local(pool) = &self.source else {
            return Err(Error::Transport("no local pool configured".to_string()));
        };
        match (self.config.grouped, pool) {
            (false, ResultSet::Flat(items)) => {
                Ok(ResultSet::Flat(matcher::match_flat(query, items)))
            }
            (true, ResultSet::Grouped(groups)) => {
                Ok(ResultSet::Grouped(matcher::match_grouped(query, groups)))
            }
            (false, ResultSet::Grouped(_)) => Err(Error::MalformedResult {
                expected: "flat",
                got: "grouped",
            }),
            (true, ResultSet::Flat(_)) => Err(Error::MalformedResult {
                expected: "grouped",
                got: "flat",
            }),
        }
    }

    fn handle_fetch_result(&mut self, msg: &FetchResultMsg) -> Option<Cmd> {
        if msg.id != self.id || msg.generation != self.generation {
            return None;
        }
        // Query tagging: a slow response for an earlier value must not
        // overwrite results for what the field says now.
        if msg.query != self.value {
            return None;
        }
        match &msg.result {
            Ok(results) => self.receive_results(results.clone()),
            Err(err) => {
                // Prior list state stays untouched on a failed refresh.
                self.err = Some(err.clone());
                None
            }
        }
    }

    /// Installs a result set: normalize, reset the selection, open.
    fn receive_results(&mut self, results: ResultSet) -> Option<Cmd> {
        if let Some(hook) = &self.on_results {
            hook(&results);
        }
        let expected = if self.config.grouped { "grouped" } else { "flat" };
        if results.shape() != expected {
            self.err = Some(Error::MalformedResult {
                expected,
                got: results.shape(),
            });
            return None;
        }
        self.err = None;
        self.items = results.flatten(self.config.max_items);
        self.groups = if self.config.grouped {
            results.capped_groups(self.config.max_items)
        } else {
            Vec::new()
        };
        self.selection.reset();
        self.state = ListState::Open;
        None
    }

    /// Commit path shared by Enter and pointer selection.
    fn commit(&mut self, index: usize) -> Option<Cmd> {
        let cmd = match (&self.on_select, self.items.get(index)) {
            (Some(f), item) => f(index, item),
            (None, _) => None,
        };
        self.last_query = Some(self.value.clone());
        if self.config.close_on_select {
            self.close();
        }
        cmd
    }

    /// Highest selectable index: one past the last item when the trailing
    /// "search all" row is configured, otherwise the last item. `None`
    /// when nothing is selectable.
    pub(super) fn upper_bound(&self) -> Option<usize> {
        let rows = self.items.len() + usize::from(self.config.show_search_all);
        rows.checked_sub(1)
    }
}
