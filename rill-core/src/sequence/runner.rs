//! Sequenced Runner Implementation
//!
//! The runner wraps an asynchronous operation so that of any number of
//! overlapping invocations, only the most recently issued one delivers its
//! outcome.
//!
//! # How Sequencing Works
//!
//! 1. Each call atomically increments the runner's counter and captures the
//!    new value as the invocation's ticket. Increment and capture are one
//!    uninterrupted step, and both happen synchronously at call time, before
//!    the returned future is first polled.
//!
//! 2. The operation runs. The runner never aborts it; a superseded operation
//!    keeps running and only its result is ignored.
//!
//! 3. When the operation settles, the captured ticket is compared against the
//!    counter's current value. Equal means no newer call was issued and the
//!    outcome, success or failure, is delivered. Not equal means a newer call
//!    superseded this one and the outcome is discarded.
//!
//! A later-issued call that finishes sooner wins; an earlier-issued call that
//! finishes later is discarded even though it settles after the winner. With
//! three or more overlapping calls, every intermediate one is discarded too.
//!
//! # Thread Safety
//!
//! The counter is an `AtomicU64` accessed with sequentially consistent
//! ordering, so exactly one ticket is current at any instant even on a
//! multi-threaded executor.

use std::fmt::Debug;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use super::settlement::Settlement;
use super::ticket::Ticket;

/// Sequences overlapping invocations of an asynchronous operation so that
/// only the most recently issued one delivers its outcome.
///
/// One runner guards one logical slot (one list, one detail view, one search
/// box). Create it alongside the state it protects and share it via `Arc` if
/// invocations come from several tasks. Two runners are fully independent.
///
/// # Example
///
/// ```rust,ignore
/// let runner = SequencedRunner::new();
///
/// let stale = runner.run(|| fetch_page(1));
/// let fresh = runner.run(|| fetch_page(2));
///
/// // `stale` settles as Settlement::Discarded even if its fetch finishes
/// // first; `fresh` delivers its Ok or Err unchanged.
/// ```
pub struct SequencedRunner {
    /// Highest ticket issued so far. Zero before the first invocation; never
    /// reset.
    issued: AtomicU64,
}

impl SequencedRunner {
    /// Create a runner whose first invocation receives ticket 1.
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
        }
    }

    /// Issue the next ticket.
    ///
    /// Exposed for callers that sequence by hand; [`SequencedRunner::run`]
    /// calls this internally. Two racing calls can never observe the same
    /// ticket.
    pub fn issue(&self) -> Ticket {
        Ticket::new(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Check whether `ticket` is still the latest issued.
    ///
    /// Pure read: checking a stale ticket any number of times has no side
    /// effects and never panics.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.value() == self.issued.load(Ordering::SeqCst)
    }

    /// Highest ticket value issued so far, zero before any invocation.
    pub fn last_issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// Run one sequenced invocation of `operation`.
    ///
    /// The ticket is issued and the operation's future constructed before
    /// this function returns, so issuance order is call order even when the
    /// returned futures are polled later or out of order.
    ///
    /// The returned future resolves to [`Settlement::Delivered`] with the
    /// operation's result if this invocation still holds the highest ticket
    /// when the operation settles, and to [`Settlement::Discarded`] if a
    /// newer invocation was issued in the meantime. A discarded failure is
    /// absorbed silently; it is never logged or re-thrown here.
    pub fn run<'a, Op, Fut, T, E>(&'a self, operation: Op) -> impl Future<Output = Settlement<T, E>> + 'a
    where
        Op: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + 'a,
    {
        let ticket = self.issue();
        let pending = operation();

        async move {
            let outcome = pending.await;

            if self.is_current(ticket) {
                Settlement::Delivered(outcome)
            } else {
                Settlement::Discarded
            }
        }
    }
}

impl Default for SequencedRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for SequencedRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequencedRunner")
            .field("last_issued", &self.last_issued())
            .finish()
    }
}

/// A sequenced wrapper around one operation factory.
///
/// Calling [`Sequenced::invoke`] behaves like calling the factory directly,
/// except that overlapping calls resolve under the latest-call-wins rule of
/// the owning [`SequencedRunner`].
pub struct Sequenced<Op> {
    runner: SequencedRunner,
    operation: Op,
}

impl<Op> Sequenced<Op> {
    /// Wrap an operation factory with its own fresh runner.
    pub fn wrap(operation: Op) -> Self {
        Self {
            runner: SequencedRunner::new(),
            operation,
        }
    }

    /// Invoke the wrapped operation with `args`.
    ///
    /// The ticket is issued at call time, exactly as with
    /// [`SequencedRunner::run`].
    pub fn invoke<'a, A, Fut, T, E>(&'a self, args: A) -> impl Future<Output = Settlement<T, E>> + 'a
    where
        Op: Fn(A) -> Fut,
        Fut: Future<Output = Result<T, E>> + 'a,
    {
        self.runner.run(|| (self.operation)(args))
    }

    /// Access the owning runner, for ticket inspection.
    pub fn runner(&self) -> &SequencedRunner {
        &self.runner
    }
}

impl<Op> Debug for Sequenced<Op> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequenced")
            .field("runner", &self.runner)
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_strictly_increasing_without_gaps() {
        let runner = SequencedRunner::new();
        assert_eq!(runner.last_issued(), 0);

        for expected in 1..=100u64 {
            assert_eq!(runner.issue().value(), expected);
        }

        assert_eq!(runner.last_issued(), 100);
    }

    #[test]
    fn only_the_latest_ticket_is_current() {
        let runner = SequencedRunner::new();

        let first = runner.issue();
        assert!(runner.is_current(first));

        let second = runner.issue();
        assert!(!runner.is_current(first));
        assert!(runner.is_current(second));
    }

    #[test]
    fn stale_check_is_repeatable() {
        let runner = SequencedRunner::new();
        let stale = runner.issue();
        runner.issue();

        // A double-settle of a discarded invocation boils down to checking
        // the same stale ticket twice; both checks must agree and neither
        // may panic or flip any state.
        assert!(!runner.is_current(stale));
        assert!(!runner.is_current(stale));
        assert_eq!(runner.last_issued(), 2);
    }

    #[test]
    fn runners_are_independent() {
        let left = SequencedRunner::new();
        let right = SequencedRunner::new();

        let left_ticket = left.issue();
        right.issue();
        right.issue();

        // Activity on `right` must not stale out `left`.
        assert!(left.is_current(left_ticket));
        assert_eq!(left.last_issued(), 1);
        assert_eq!(right.last_issued(), 2);
    }

    #[tokio::test]
    async fn single_invocation_delivers_its_success() {
        let runner = SequencedRunner::new();

        let settlement = runner.run(|| async { Ok::<_, ()>(42) }).await;

        assert_eq!(settlement, Settlement::Delivered(Ok(42)));
    }

    #[tokio::test]
    async fn single_invocation_delivers_its_failure() {
        let runner = SequencedRunner::new();

        let settlement = runner.run(|| async { Err::<i32, _>("boom") }).await;

        assert_eq!(settlement, Settlement::Delivered(Err("boom")));
    }

    #[tokio::test]
    async fn pending_invocation_is_discarded_once_superseded() {
        let runner = SequencedRunner::new();

        // Tickets are issued at call time, so `stale` is superseded before
        // either future is polled.
        let stale = runner.run(|| async { Ok::<_, ()>("first") });
        let fresh = runner.run(|| async { Ok::<_, ()>("second") });

        assert_eq!(stale.await, Settlement::Discarded);
        assert_eq!(fresh.await, Settlement::Delivered(Ok("second")));
    }

    #[tokio::test]
    async fn superseded_failure_is_absorbed() {
        let runner = SequencedRunner::new();

        let stale = runner.run(|| async { Err::<(), _>("lost") });
        let fresh = runner.run(|| async { Ok::<_, &str>(()) });

        assert_eq!(stale.await, Settlement::Discarded);
        assert_eq!(fresh.await, Settlement::Delivered(Ok(())));
    }

    #[tokio::test]
    async fn wrapped_operation_receives_its_args() {
        let double = Sequenced::wrap(|n: i32| async move { Ok::<_, ()>(n * 2) });

        let settlement = double.invoke(21).await;

        assert_eq!(settlement, Settlement::Delivered(Ok(42)));
        assert_eq!(double.runner().last_issued(), 1);
    }

    #[tokio::test]
    async fn wrapped_overlap_resolves_latest_wins() {
        let echo = Sequenced::wrap(|n: i32| async move { Ok::<_, ()>(n) });

        let stale = echo.invoke(1);
        let fresh = echo.invoke(2);

        assert_eq!(stale.await, Settlement::Discarded);
        assert_eq!(fresh.await, Settlement::Delivered(Ok(2)));
    }
}
