//! Settlement of a sequenced invocation.
//!
//! Rust futures always settle, so "the stale call's promise never resolves"
//! is modeled as an explicit variant instead: every sequenced invocation
//! completes with a [`Settlement`], and the boundary that applies outcomes to
//! UI state simply does nothing on `Discarded`.

/// Terminal outcome of one sequenced invocation.
///
/// Per invocation the lifecycle is `Issued -> Pending -> {Delivered |
/// Discarded}`; both end states are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement<T, E> {
    /// This invocation still held the highest ticket when its operation
    /// settled. The result, success or failure alike, reaches the caller
    /// unchanged.
    Delivered(Result<T, E>),

    /// A newer invocation was issued while this one was in flight. The
    /// operation's result was dropped without logging or side effects.
    Discarded,
}

impl<T, E> Settlement<T, E> {
    /// True if this invocation's outcome reached the caller.
    pub fn is_delivered(&self) -> bool {
        matches!(self, Settlement::Delivered(_))
    }

    /// True if this invocation was superseded by a newer one.
    pub fn is_discarded(&self) -> bool {
        matches!(self, Settlement::Discarded)
    }

    /// Unwrap into the delivered result, if any.
    pub fn delivered(self) -> Option<Result<T, E>> {
        match self {
            Settlement::Delivered(result) => Some(result),
            Settlement::Discarded => None,
        }
    }
}
