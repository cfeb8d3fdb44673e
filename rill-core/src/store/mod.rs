//! State Containers
//!
//! Thin consumers of asynchronous operations: each container owns a block of
//! mutable state behind a `Mutex` and drives a caller-supplied fetch or
//! submit function. The embedding view layer re-reads container state after
//! each operation completes; containers carry no notification or
//! subscription machinery of their own.
//!
//! # Overlap Policy
//!
//! Containers guard their operation with a single-slot loading flag: a call
//! that arrives while another is in flight is rejected outright with
//! [`StoreError::Busy`]. The rejection is visible to the caller, which suits
//! form submits and detail loads where a second click should bounce.
//!
//! Call sites where input outpaces responses (type-ahead search, rapid page
//! flipping) want latest-call-wins instead of rejection: route the same
//! fetch function through a [`crate::sequence::SequencedRunner`] and apply
//! only delivered settlements to the container state.

mod error;
mod list;
mod detail;
mod form;
mod modal;

pub use error::StoreError;
pub use list::{ListPage, ListStore, PageQuery, Pagination, DEFAULT_PAGE_SIZE};
pub use detail::DetailStore;
pub use form::FormStore;
pub use modal::ModalState;
