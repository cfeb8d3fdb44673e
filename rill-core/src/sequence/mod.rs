//! Sequenced Async Tasks
//!
//! This module implements the request-sequencing primitive that keeps
//! overlapping asynchronous calls from corrupting displayed state: of all
//! invocations issued against one runner, only the most recently issued one
//! may deliver its outcome. Every earlier invocation still in flight is
//! discarded when it settles, no matter the order in which the underlying
//! operations actually finish.
//!
//! # Concepts
//!
//! ## Tickets
//!
//! Each invocation captures a [`Ticket`], the runner's counter value after an
//! atomic increment. Tickets are issued in strict call order, so the highest
//! ticket always identifies the most recent call.
//!
//! ## Settlement
//!
//! An invocation ends in exactly one of two terminal states, expressed as the
//! [`Settlement`] enum: `Delivered` carries the operation's result (success or
//! failure) to the caller; `Discarded` means a newer invocation superseded this
//! one and its result was dropped. Discarded is not an error and produces no
//! log output.
//!
//! # Implementation Notes
//!
//! The runner never aborts a superseded operation. The operation keeps running
//! to completion; only its result is ignored. A caller that needs timeouts or
//! real cancellation builds them outside and treats a timeout as another
//! invocation path.
//!
//! The counter lives on the runner instance rather than in a process-wide
//! static, so two runners wrapping unrelated operations can never influence
//! each other's staleness decisions.

mod ticket;
mod settlement;
mod runner;

pub use ticket::Ticket;
pub use settlement::Settlement;
pub use runner::{Sequenced, SequencedRunner};
