//! Detail Store
//!
//! Holds one fetched record. The same single-slot guard as the list store:
//! a second load while one is pending is rejected with
//! [`StoreError::Busy`].

use std::future::Future;

use parking_lot::Mutex;
use tracing::error;

use super::error::StoreError;

struct DetailState<I> {
    loading: bool,
    item: Option<I>,
}

/// Single-record container driving a fetcher `F`.
///
/// The item stays `None` until the first successful load and keeps the last
/// fetched value across failed reloads.
pub struct DetailStore<I, F> {
    fetch: F,
    state: Mutex<DetailState<I>>,
}

impl<I, F> DetailStore<I, F> {
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            state: Mutex::new(DetailState {
                loading: false,
                item: None,
            }),
        }
    }

    /// Fetch the record and store it.
    pub async fn load<Fut, E>(&self) -> Result<(), StoreError<E>>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<I, E>>,
        E: std::fmt::Display,
    {
        {
            let mut state = self.state.lock();
            if state.loading {
                return Err(StoreError::Busy);
            }
            state.loading = true;
        }

        match (self.fetch)().await {
            Ok(item) => {
                let mut state = self.state.lock();
                state.item = Some(item);
                state.loading = false;
                Ok(())
            }
            Err(err) => {
                self.state.lock().loading = false;
                error!(error = %err, "detail load failed");
                Err(StoreError::Operation(err))
            }
        }
    }

    /// Last fetched record, cloned out.
    pub fn item(&self) -> Option<I>
    where
        I: Clone,
    {
        self.state.lock().item.clone()
    }

    /// True while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq, Eq)]
    #[error("fetch failed")]
    struct FetchError;

    #[tokio::test]
    async fn load_stores_the_fetched_item() {
        let store = DetailStore::new(|| async { Ok::<_, FetchError>("record") });

        assert_eq!(store.item(), None);
        store.load().await.unwrap();
        assert_eq!(store.item(), Some("record"));
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn failed_load_keeps_the_previous_item() {
        let succeed = std::sync::atomic::AtomicBool::new(true);

        let store = DetailStore::new(move || {
            let ok = succeed.swap(false, std::sync::atomic::Ordering::SeqCst);
            async move {
                if ok {
                    Ok("record")
                } else {
                    Err(FetchError)
                }
            }
        });

        store.load().await.unwrap();
        let err = store.load().await.unwrap_err();

        assert_eq!(err, StoreError::Operation(FetchError));
        assert_eq!(store.item(), Some("record"));
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn overlapping_load_is_rejected_as_busy() {
        let (release, gate) = tokio::sync::oneshot::channel::<()>();
        let gate = parking_lot::Mutex::new(Some(gate));

        let store = DetailStore::new(move || {
            let gate = gate.lock().take();
            async move {
                if let Some(gate) = gate {
                    gate.await.unwrap();
                }
                Ok::<_, FetchError>(1)
            }
        });

        let (first, second) = tokio::join!(store.load(), async {
            let result = store.load().await;
            release.send(()).unwrap();
            result
        });

        assert_eq!(first, Ok(()));
        assert_eq!(second, Err(StoreError::Busy));
        assert_eq!(store.item(), Some(1));
    }
}
