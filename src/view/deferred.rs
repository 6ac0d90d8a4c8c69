use chrono::{DateTime, Duration, Utc};
use std::{cell::Cell, rc::Rc, time::UNIX_EPOCH};

/// A source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. Clones share
/// the same time, so one handle can drive a clock that
/// has been moved into an editor.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    /// Start at the unix epoch
    pub fn new() -> Self {
        Self { now: Rc::new(Cell::new(DateTime::<Utc>::from(UNIX_EPOCH))) }
    }

    /// Move the clock forward. Returns false, leaving the
    /// time unchanged, if that would leave the calendar.
    pub fn advance(&self, by: Duration) -> bool {
        match self.now.get().checked_add_signed(by) {
            Some(now) => { self.now.set(now); true },
            None => false,
        }
    }

    pub fn advance_ms(&self, ms: i64) -> bool {
        self.advance(Duration::milliseconds(ms))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// A single debounced callback. Scheduling again moves
/// the deadline, so at most one call is ever pending and
/// it always acts on the latest state.
#[derive(Debug, Clone)]
pub struct Deferred {
    delay: Duration,
    due: Option<DateTime<Utc>>,
}

impl Deferred {

    pub fn new(delay: Duration) -> Self {
        Self { delay, due: None }
    }

    /// (Re)schedule the callback, returns its deadline
    pub fn schedule(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        // past the end of the calendar, fire as soon as possible
        let due = now.checked_add_signed(self.delay).unwrap_or(now);
        self.due = Some(due);
        due
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Returns true exactly once when the deadline has passed
    pub fn fire(&mut self, now: DateTime<Utc>) -> bool {
        match self.due {
            Some(due) if due <= now => { self.due = None; true },
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }
}

#[cfg(test)]
mod suite {
    use super::*;

    #[test]
    fn check_manual_clock_is_shared() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        let start = clock.now();
        handle.advance_ms(50);
        assert_eq!(clock.now() - start, Duration::milliseconds(50));
    }

    #[test]
    fn check_fire_after_delay() {
        let clock = ManualClock::new();
        let mut d = Deferred::new(Duration::milliseconds(50));
        assert!(!d.fire(clock.now()));
        d.schedule(clock.now());
        assert!(d.is_pending());
        clock.advance_ms(49);
        assert!(!d.fire(clock.now()));
        clock.advance_ms(1);
        assert!(d.fire(clock.now()));
        assert!(!d.fire(clock.now()));
        assert!(!d.is_pending());
    }

    #[test]
    fn check_reschedule_moves_deadline() {
        let clock = ManualClock::new();
        let mut d = Deferred::new(Duration::milliseconds(50));
        d.schedule(clock.now());
        clock.advance_ms(30);
        d.schedule(clock.now());
        clock.advance_ms(30);
        assert!(!d.fire(clock.now()));
        clock.advance_ms(20);
        assert!(d.fire(clock.now()));
    }

    #[test]
    fn check_advance_out_of_range() {
        let clock = ManualClock::new();
        let start = clock.now();
        assert!(!clock.advance(Duration::max_value()));
        assert_eq!(clock.now(), start);
        assert!(clock.advance_ms(1));
    }

    #[test]
    fn check_cancel() {
        let clock = ManualClock::new();
        let mut d = Deferred::new(Duration::milliseconds(0));
        d.schedule(clock.now());
        d.cancel();
        assert!(!d.fire(clock.now()));
    }
}
