//! Refresh scheduler: ownership of the auto-refresh poll timer.
//!
//! The interval handle has exactly one owner. Toggling auto-refresh on
//! replaces any previous handle (dropping it cancels the old timer) and
//! toggling off or unmounting cancels outright, so timers never leak or
//! stack.

use gloo_timers::callback::Interval;

/// Single-owner wrapper around a cancellable timer handle. Cancellation
/// is idempotent; the wrapped handle cancels its timer when dropped.
#[derive(Debug, Default)]
pub struct PollHandle<T> {
    inner: Option<T>,
}

impl<T> PollHandle<T> {
    pub const fn empty() -> Self {
        Self { inner: None }
    }

    /// Install a new handle, cancelling any previous one.
    pub fn replace(&mut self, handle: T) {
        self.inner = Some(handle);
    }

    /// Cancel the current timer if one is running.
    pub fn cancel(&mut self) {
        self.inner = None;
    }

    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }
}

/// Build the recurring poll timer. The first tick fires after the first
/// period elapses; the immediate fetch at toggle-on is dispatched
/// separately by the caller.
pub fn spawn_poll_interval<F>(period_ms: u32, on_tick: F) -> Interval
where
    F: Fn() + 'static,
{
    Interval::new(period_ms, on_tick)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stand-in timer handle that records its own cancellation (drop).
    struct FakeTimer {
        cancelled: Rc<Cell<u32>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    fn fake_timer() -> (FakeTimer, Rc<Cell<u32>>) {
        let cancelled = Rc::new(Cell::new(0));
        (
            FakeTimer {
                cancelled: cancelled.clone(),
            },
            cancelled,
        )
    }

    #[test]
    fn test_replace_cancels_previous_handle() {
        let mut poll = PollHandle::empty();
        let (first, first_cancelled) = fake_timer();
        let (second, second_cancelled) = fake_timer();

        poll.replace(first);
        assert!(poll.is_active());
        assert_eq!(first_cancelled.get(), 0);

        poll.replace(second);
        assert!(poll.is_active());
        assert_eq!(first_cancelled.get(), 1);
        assert_eq!(second_cancelled.get(), 0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut poll = PollHandle::empty();
        let (timer, cancelled) = fake_timer();

        poll.replace(timer);
        poll.cancel();
        assert!(!poll.is_active());
        assert_eq!(cancelled.get(), 1);

        // A second cancel has nothing to do.
        poll.cancel();
        assert!(!poll.is_active());
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn test_empty_handle_is_inactive() {
        let poll: PollHandle<FakeTimer> = PollHandle::empty();
        assert!(!poll.is_active());
    }
}
