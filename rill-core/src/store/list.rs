//! Paginated List Store
//!
//! Holds the items and pagination block for one paginated collection and
//! drives a caller-supplied fetcher.
//!
//! # How Loading Works
//!
//! 1. `load` snapshots the current page query under the lock and flips the
//!    loading flag. A call that finds the flag already set returns
//!    [`StoreError::Busy`] without touching any other state.
//!
//! 2. The fetcher runs with the lock released, so readers and `map_items`
//!    stay responsive while a request is in flight.
//!
//! 3. On success the page is folded back in: the first page replaces the
//!    items; later pages replace or extend depending on append mode. The
//!    pagination block is recomputed from the reported total.
//!
//! 4. On failure the loading flag is cleared, the error is logged, and the
//!    error propagates to the caller.
//!
//! # Totals
//!
//! A fetcher may omit `total_items`. On the first page the store falls back
//! to the length of the returned items; on later pages it keeps the total it
//! already has.

use std::future::Future;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::error;

use super::error::StoreError;

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Query handed to a list fetcher. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub current_page: usize,
    pub page_size: usize,
}

/// One fetched page of a paginated collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage<I> {
    /// Items on this page.
    pub items: Vec<I>,

    /// Collection-wide item count, if the backend reports one.
    pub total_items: Option<usize>,
}

/// Pagination block derived from fetched pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl Pagination {
    fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
            total_items: 0,
            total_pages: 0,
        }
    }
}

struct ListState<I> {
    loading: bool,
    finished: bool,
    items: Vec<I>,
    pagination: Pagination,
}

/// Paginated list container driving a fetcher `F`.
///
/// The fetcher receives a [`PageQuery`] and returns a future of
/// [`ListPage`]. Overlapping loads are rejected, not sequenced; see the
/// module docs of [`crate::store`] for when to reach for the sequenced
/// runner instead.
///
/// # Example
///
/// ```rust,ignore
/// let store = ListStore::new(|query: PageQuery| api.fruits(query));
///
/// store.load().await?;
/// render(store.items(), store.pagination());
///
/// store.set_current_page(2).await?;
/// render(store.items(), store.pagination());
/// ```
pub struct ListStore<I, F> {
    fetch: F,

    /// With append mode on, pages past the first extend the item list
    /// instead of replacing it (infinite-scroll style).
    append: bool,

    state: Mutex<ListState<I>>,
}

impl<I, F> ListStore<I, F> {
    /// Create a store with the default page size and replace-on-load
    /// behavior.
    pub fn new(fetch: F) -> Self {
        Self::with_options(fetch, DEFAULT_PAGE_SIZE, false)
    }

    /// Create a store with an explicit page size and append mode.
    pub fn with_options(fetch: F, page_size: usize, append: bool) -> Self {
        Self {
            fetch,
            append,
            state: Mutex::new(ListState {
                loading: false,
                finished: false,
                items: Vec::new(),
                pagination: Pagination::new(page_size),
            }),
        }
    }

    /// Fetch the current page and fold it into the store.
    pub async fn load<Fut, E>(&self) -> Result<(), StoreError<E>>
    where
        F: Fn(PageQuery) -> Fut,
        Fut: Future<Output = Result<ListPage<I>, E>>,
        E: std::fmt::Display,
    {
        let query = {
            let mut state = self.state.lock();
            if state.loading {
                return Err(StoreError::Busy);
            }
            state.loading = true;
            state.finished = false;
            PageQuery {
                current_page: state.pagination.current_page,
                page_size: state.pagination.page_size,
            }
        };

        match (self.fetch)(query).await {
            Ok(page) => {
                let mut state = self.state.lock();
                let first_page = query.current_page == 1;

                let total_items = match page.total_items {
                    Some(total) => total,
                    None if first_page => page.items.len(),
                    None => state.pagination.total_items,
                };

                if first_page || !self.append {
                    state.items = page.items;
                } else {
                    state.items.extend(page.items);
                }

                state.pagination.total_items = total_items;
                state.pagination.total_pages =
                    total_pages(total_items, state.pagination.page_size);
                state.finished = true;
                state.loading = false;
                Ok(())
            }
            Err(err) => {
                self.state.lock().loading = false;
                error!(error = %err, "list load failed");
                Err(StoreError::Operation(err))
            }
        }
    }

    /// Jump to `page` and load it.
    pub async fn set_current_page<Fut, E>(&self, page: usize) -> Result<(), StoreError<E>>
    where
        F: Fn(PageQuery) -> Fut,
        Fut: Future<Output = Result<ListPage<I>, E>>,
        E: std::fmt::Display,
    {
        self.state.lock().pagination.current_page = page;
        self.load().await
    }

    /// Change the page size, rewind to the first page, and load it.
    pub async fn set_page_size<Fut, E>(&self, page_size: usize) -> Result<(), StoreError<E>>
    where
        F: Fn(PageQuery) -> Fut,
        Fut: Future<Output = Result<ListPage<I>, E>>,
        E: std::fmt::Display,
    {
        {
            let mut state = self.state.lock();
            state.pagination.page_size = page_size;
            state.pagination.current_page = 1;
        }
        self.load().await
    }

    /// Rewrite the held items in place.
    ///
    /// Usable while a load is in flight; the fetched page is folded in
    /// afterwards under the usual replace/append rules.
    pub fn map_items(&self, mut f: impl FnMut(&mut I)) {
        let mut state = self.state.lock();
        for item in state.items.iter_mut() {
            f(item);
        }
    }

    /// Current items, cloned out.
    pub fn items(&self) -> Vec<I>
    where
        I: Clone,
    {
        self.state.lock().items.clone()
    }

    /// Current pagination block.
    pub fn pagination(&self) -> Pagination {
        self.state.lock().pagination
    }

    /// True while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    /// True once a fetch has completed since the last load began.
    pub fn is_finished(&self) -> bool {
        self.state.lock().finished
    }
}

fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
