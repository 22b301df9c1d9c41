//! Trailing-edge debounce for form input.
//!
//! The caller supplies the clock: `now` is any monotonic [`Duration`] since
//! an arbitrary epoch. A value pushed at `t` becomes ready at `t + delay`
//! unless another push supersedes it first.
//!
//! ```
//! use core::time::Duration;
//! use printfit::Debouncer;
//!
//! let mut d = Debouncer::new(Duration::from_millis(300));
//! d.push("1", Duration::from_millis(0));
//! d.push("16", Duration::from_millis(120));
//! assert_eq!(d.poll(Duration::from_millis(300)), None);
//! assert_eq!(d.poll(Duration::from_millis(420)), Some("16"));
//! assert_eq!(d.poll(Duration::from_millis(900)), None);
//! ```

use core::time::Duration;

/// Quiescence period before an edit is applied.
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(300);

#[derive(Clone, Debug, PartialEq)]
struct Pending<T> {
    value: T,
    due: Duration,
}

/// Holds the latest value until input has been quiet for `delay`.
#[derive(Clone, Debug, PartialEq)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_QUIESCENCE)
    }
}

impl<T> Debouncer<T> {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new value at `now`. Returns the value it superseded, if any.
    pub fn push(&mut self, value: T, now: Duration) -> Option<T> {
        let due = now.saturating_add(self.delay);
        self.pending
            .replace(Pending { value, due })
            .map(|p| p.value)
    }

    /// Take the pending value if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| now >= p.due) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// When the pending value becomes ready.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without applying it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }
}
