//! Trailing-edge debounce as a clock-driven state machine.
//!
//! The caller supplies timestamps (milliseconds on any monotonic clock) and
//! is responsible for waking up at [`Debouncer::deadline`]. This keeps the
//! timing rules independent of the host's timer API.

/// Latest input waiting for its quiet window to elapse.
#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: u64,
}

/// Propagates the most recent input only after it has been stable for
/// `delay_ms`. Intermediate values are dropped, never queued.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    settled: T,
    pending: Option<Pending<T>>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            settled: initial,
            pending: None,
        }
    }

    /// The last propagated value.
    pub fn value(&self) -> &T {
        &self.settled
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// When the pending value will settle, if anything is pending.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a new input at `now`, returning the deadline to wake up at.
    ///
    /// A value different from the pending one restarts the window. Repeating
    /// the pending value leaves its deadline untouched.
    pub fn push(&mut self, value: T, now: u64) -> u64 {
        if let Some(pending) = &self.pending
            && pending.value == value
        {
            return pending.deadline;
        }
        let deadline = now.saturating_add(self.delay_ms);
        self.pending = Some(Pending { value, deadline });
        deadline
    }

    /// Settle the pending value if its window has elapsed by `now`.
    ///
    /// Returns the newly settled value, or `None` when nothing changed.
    pub fn poll(&mut self, now: u64) -> Option<&T> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if !due {
            return None;
        }
        let pending = self.pending.take()?;
        if pending.value == self.settled {
            return None;
        }
        self.settled = pending.value;
        Some(&self.settled)
    }

    /// Drop any pending value without propagating it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Replace both settled and pending state immediately (e.g. "clear filters").
    pub fn reset(&mut self, value: T) {
        self.pending = None;
        self.settled = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rapid_updates_settle_once_on_last_value() {
        let mut d = Debouncer::new(String::new(), 300);
        d.push("s".into(), 0);
        d.push("sh".into(), 50);
        let deadline = d.push("shi".into(), 100);
        assert_eq!(deadline, 400);

        assert_eq!(d.poll(300), None);
        assert_eq!(d.poll(399), None);
        assert_eq!(d.value(), "");

        assert_eq!(d.poll(400).map(String::as_str), Some("shi"));
        assert_eq!(d.value(), "shi");
        // Nothing further propagates.
        assert_eq!(d.poll(1000), None);
    }

    #[test]
    fn test_repeated_value_keeps_deadline() {
        let mut d = Debouncer::new(0u32, 100);
        assert_eq!(d.push(5, 0), 100);
        assert_eq!(d.push(5, 60), 100);
        assert_eq!(d.poll(100), Some(&5));
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut d = Debouncer::new(1u32, 100);
        d.push(2, 0);
        d.cancel();
        assert!(!d.is_pending());
        assert_eq!(d.poll(500), None);
        assert_eq!(*d.value(), 1);
    }

    #[test]
    fn test_returning_to_settled_value_propagates_nothing() {
        let mut d = Debouncer::new("a", 100);
        d.push("b", 0);
        d.push("a", 10);
        assert_eq!(d.poll(200), None);
        assert_eq!(*d.value(), "a");
    }

    #[test]
    fn test_reset() {
        let mut d = Debouncer::new("a", 100);
        d.push("b", 0);
        d.reset("");
        assert_eq!(d.deadline(), None);
        assert_eq!(*d.value(), "");
    }
}
