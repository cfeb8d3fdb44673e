//! Rill Core
//!
//! This crate provides the core state-management runtime for the Rill UI
//! toolkit. It implements:
//!
//! - Sequenced async tasks (latest-call-wins request sequencing)
//! - Paginated list, detail, and form state containers
//! - Modal visibility state
//!
//! The crate is view-layer agnostic: containers hold plain state behind
//! interior mutability, and the embedding UI re-reads that state after each
//! operation completes. No rendering or subscription machinery lives here.
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - `sequence`: the sequenced runner with its ticket and settlement types
//! - `store`: the list/detail/form/modal state containers
//!
//! # Example
//!
//! ```rust,ignore
//! use rill_core::sequence::{SequencedRunner, Settlement};
//!
//! let runner = SequencedRunner::new();
//!
//! // Overlapping calls: tickets are issued in call order, so only the
//! // second call can deliver, regardless of which response lands first.
//! let stale = runner.run(|| search("ru"));
//! let fresh = runner.run(|| search("rust"));
//!
//! match fresh.await {
//!     Settlement::Delivered(Ok(results)) => render(results),
//!     Settlement::Delivered(Err(err)) => render_error(err),
//!     Settlement::Discarded => {} // superseded while in flight
//! }
//! ```

pub mod sequence;
pub mod store;
