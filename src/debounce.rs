//! Debounce and throttle timing for fetch scheduling.
//!
//! Both utilities turn bursts of triggers into message-carrying tick
//! commands, using the id/tag filtering pattern: every scheduled fire
//! carries the owner's unique id plus a tag snapshot, and bumping the tag
//! invalidates every fire scheduled before the bump. Each owner therefore
//! has at most one live pending fire, and the fire that survives always
//! carries the latest query (last trigger wins).
//!
//! [`Debouncer`] implements trailing-edge debouncing of keystrokes: each
//! new trigger cancels the previous pending fire and reschedules a full
//! delay. [`Throttle`] enforces a minimum interval between dispatches: an
//! early trigger is deferred to exactly the instant the interval elapses,
//! superseding any previously deferred trigger.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Unique ids let several widgets coexist without consuming each other's
/// timer messages.
fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Message fired when a debounce window elapses without a newer keystroke.
#[derive(Debug, Clone)]
pub struct DebounceMsg {
    /// Id of the debouncer that scheduled this fire.
    pub id: i64,
    /// The query captured at trigger time.
    pub query: String,
    tag: i64,
}

/// Trailing-edge keystroke debouncer.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::debounce::Debouncer;
/// use std::time::Duration;
///
/// let mut debouncer = Debouncer::new(Some(Duration::from_millis(300)));
/// let cmd = debouncer.trigger("blå".to_string());
/// assert!(cmd.is_some());
///
/// // Without a configured delay the caller dispatches immediately.
/// let mut immediate = Debouncer::new(None);
/// assert!(immediate.trigger("blå".to_string()).is_none());
/// ```
#[derive(Debug)]
pub struct Debouncer {
    id: i64,
    tag: i64,
    delay: Option<Duration>,
}

impl Debouncer {
    /// Creates a debouncer; `None` disables debouncing entirely.
    pub fn new(delay: Option<Duration>) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            delay,
        }
    }

    /// This debouncer's unique id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Schedules a fire for `query` after the configured delay,
    /// invalidating any earlier pending fire.
    ///
    /// Returns `None` when no delay is configured, in which case the
    /// caller should dispatch right away.
    pub fn trigger(&mut self, query: String) -> Option<Cmd> {
        let delay = self.delay?;
        self.tag += 1;
        let id = self.id;
        let tag = self.tag;
        Some(bubbletea_tick(delay, move |_| {
            Box::new(DebounceMsg {
                id,
                query: query.clone(),
                tag,
            }) as Msg
        }))
    }

    /// Whether a fire belongs to this debouncer and has not been
    /// superseded by a later trigger or a cancel.
    pub fn accepts(&self, msg: &DebounceMsg) -> bool {
        msg.id == self.id && msg.tag == self.tag
    }

    /// Invalidates any pending fire.
    pub fn cancel(&mut self) {
        self.tag += 1;
    }
}

/// Message fired when a deferred dispatch's wait elapses.
#[derive(Debug, Clone)]
pub struct ThrottleMsg {
    /// Id of the throttle that deferred this dispatch.
    pub id: i64,
    /// The query captured at trigger time.
    pub query: String,
    tag: i64,
}

/// Outcome of asking the throttle to admit a dispatch.
pub enum Admission {
    /// The interval budget allows dispatching immediately.
    Now,
    /// Too soon; the returned command fires a [`ThrottleMsg`] exactly when
    /// the budget elapses.
    Deferred(Cmd),
}

/// Minimum-interval rate limiter for remote fetch dispatches.
#[derive(Debug)]
pub struct Throttle {
    id: i64,
    tag: i64,
    budget: Option<Duration>,
    last_dispatch: Option<Instant>,
}

impl Throttle {
    /// Creates a throttle; `None` disables rate limiting.
    pub fn new(budget: Option<Duration>) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            budget,
            last_dispatch: None,
        }
    }

    /// This throttle's unique id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Admits a dispatch now, or defers it until the interval budget
    /// elapses. A deferred dispatch supersedes any earlier deferred one.
    pub fn admit(&mut self, query: String) -> Admission {
        let Some(budget) = self.budget else {
            self.last_dispatch = Some(Instant::now());
            return Admission::Now;
        };
        let elapsed = self.last_dispatch.map(|t| t.elapsed());
        match elapsed {
            Some(elapsed) if elapsed < budget => {
                self.tag += 1;
                let id = self.id;
                let tag = self.tag;
                Admission::Deferred(bubbletea_tick(budget - elapsed, move |_| {
                    Box::new(ThrottleMsg {
                        id,
                        query: query.clone(),
                        tag,
                    }) as Msg
                }))
            }
            _ => {
                self.last_dispatch = Some(Instant::now());
                Admission::Now
            }
        }
    }

    /// Whether a deferred fire belongs to this throttle and is still the
    /// latest one.
    pub fn accepts(&self, msg: &ThrottleMsg) -> bool {
        msg.id == self.id && msg.tag == self.tag
    }

    /// Records that a deferred dispatch went out, restarting the interval.
    pub fn mark_dispatched(&mut self) {
        self.last_dispatch = Some(Instant::now());
    }

    /// Invalidates any pending deferred dispatch.
    pub fn cancel(&mut self) {
        self.tag += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn downcast_debounce(msg: Msg) -> DebounceMsg {
        msg.downcast_ref::<DebounceMsg>()
            .expect("expected DebounceMsg")
            .clone()
    }

    #[tokio::test]
    async fn test_last_trigger_wins() {
        let mut debouncer = Debouncer::new(Some(Duration::from_millis(5)));
        let first = debouncer.trigger("bl".to_string()).unwrap();
        let second = debouncer.trigger("blå".to_string()).unwrap();

        let first = downcast_debounce(first.await.unwrap());
        let second = downcast_debounce(second.await.unwrap());

        assert!(!debouncer.accepts(&first));
        assert!(debouncer.accepts(&second));
        assert_eq!(second.query, "blå");
    }

    #[tokio::test]
    async fn test_cancel_invalidates_pending_fire() {
        let mut debouncer = Debouncer::new(Some(Duration::from_millis(5)));
        let cmd = debouncer.trigger("q".to_string()).unwrap();
        debouncer.cancel();
        let fire = downcast_debounce(cmd.await.unwrap());
        assert!(!debouncer.accepts(&fire));
    }

    #[test]
    fn test_no_delay_means_immediate_dispatch() {
        let mut debouncer = Debouncer::new(None);
        assert!(debouncer.trigger("q".to_string()).is_none());
    }

    #[test]
    fn test_throttle_first_dispatch_is_immediate() {
        let mut throttle = Throttle::new(Some(Duration::from_secs(1)));
        assert!(matches!(throttle.admit("a".to_string()), Admission::Now));
    }

    #[tokio::test]
    async fn test_throttle_defers_within_budget() {
        let mut throttle = Throttle::new(Some(Duration::from_millis(20)));
        assert!(matches!(throttle.admit("a".to_string()), Admission::Now));

        let Admission::Deferred(cmd) = throttle.admit("b".to_string()) else {
            panic!("second dispatch within budget should defer");
        };
        let msg = cmd.await.unwrap();
        let fire = msg.downcast_ref::<ThrottleMsg>().unwrap().clone();
        assert!(throttle.accepts(&fire));
        assert_eq!(fire.query, "b");
    }

    #[tokio::test]
    async fn test_throttle_deferred_superseded_by_newer() {
        let mut throttle = Throttle::new(Some(Duration::from_millis(20)));
        let _ = throttle.admit("a".to_string());

        let Admission::Deferred(first) = throttle.admit("b".to_string()) else {
            panic!("expected deferral");
        };
        let Admission::Deferred(second) = throttle.admit("c".to_string()) else {
            panic!("expected deferral");
        };

        let first = first.await.unwrap().downcast_ref::<ThrottleMsg>().unwrap().clone();
        let second = second.await.unwrap().downcast_ref::<ThrottleMsg>().unwrap().clone();
        assert!(!throttle.accepts(&first));
        assert!(throttle.accepts(&second));
        assert_eq!(second.query, "c");
    }

    #[test]
    fn test_unthrottled_always_admits() {
        let mut throttle = Throttle::new(None);
        assert!(matches!(throttle.admit("a".to_string()), Admission::Now));
        assert!(matches!(throttle.admit("b".to_string()), Admission::Now));
    }
}
