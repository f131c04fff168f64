//! Monotonic tickets for "latest wins" coordination.
//!
//! The same counter drives two things: page fetches (a response is applied
//! only if its ticket is still the newest) and search debouncing (a timer
//! fires only if no keystroke came after it).

use std::cell::Cell;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Issues increasing tickets and remembers the newest one.
#[derive(Debug, Default)]
pub struct Sequence {
    latest: Cell<u64>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}

/// Trailing-edge debouncer: of several calls inside the quiet period only the
/// last one reports `true`.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Sequence,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Sequence::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register a call, wait on `timer`, then say whether this call survived.
    ///
    /// `timer` is the platform sleep for [`Debouncer::delay`]; the ticket is
    /// taken before it is awaited.
    pub async fn settle<F: Future<Output = ()>>(&self, timer: F) -> bool {
        let ticket = self.pending.issue();
        timer.await;
        self.pending.is_latest(ticket)
    }

    /// Make every call still waiting report `false`.
    pub fn cancel(&self) {
        self.pending.issue();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_ticket_is_latest() {
        let seq = Sequence::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(a < b);
        assert!(!seq.is_latest(a));
        assert!(seq.is_latest(b));
    }

    #[tokio::test]
    async fn test_debounce_keeps_last_call() {
        let debouncer = Debouncer::new(Duration::from_millis(5));
        let sleep = || tokio::time::sleep(Duration::from_millis(5));
        let (a, b, c) = tokio::join!(
            debouncer.settle(sleep()),
            debouncer.settle(sleep()),
            debouncer.settle(sleep()),
        );
        assert_eq!((a, b, c), (false, false, true));
    }

    #[tokio::test]
    async fn test_debounce_after_quiet_period_fires_again() {
        let debouncer = Debouncer::new(Duration::from_millis(1));
        assert!(debouncer.settle(async {}).await);
        assert!(debouncer.settle(async {}).await);
    }

    #[tokio::test]
    async fn test_cancel_drops_waiting_call() {
        let debouncer = Debouncer::new(Duration::from_millis(5));
        let (fired, ()) = tokio::join!(debouncer.settle(tokio::time::sleep(Duration::from_millis(5))), async {
            debouncer.cancel();
        });
        assert!(!fired);
    }
}
