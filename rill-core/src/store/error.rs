//! Consumer-layer error type.

use thiserror::Error;

/// Errors surfaced by the state containers.
///
/// `Busy` carries no inner error because the operation was never started;
/// the single-slot guard rejected the call before dispatch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError<E> {
    /// A request is already in flight on this container.
    #[error("cannot start a request while one is loading")]
    Busy,

    /// The underlying fetch or submit operation failed.
    #[error("operation failed")]
    Operation(#[source] E),
}

impl<E> StoreError<E> {
    /// Unwrap the operation error, if any.
    pub fn into_operation(self) -> Option<E> {
        match self {
            StoreError::Operation(err) => Some(err),
            StoreError::Busy => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error, PartialEq, Eq)]
    #[error("fetch failed")]
    struct FetchError;

    #[test]
    fn busy_has_no_operation_error() {
        let err: StoreError<FetchError> = StoreError::Busy;
        assert_eq!(err.into_operation(), None);
    }

    #[test]
    fn operation_error_unwraps() {
        let err = StoreError::Operation(FetchError);
        assert_eq!(err.into_operation(), Some(FetchError));
    }

    #[test]
    fn operation_error_is_source_chained() {
        use std::error::Error as _;

        let err = StoreError::Operation(FetchError);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("fetch failed"));
    }
}
