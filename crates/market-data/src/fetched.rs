//! Fail-safe fetch outcome.

use log::warn;

use crate::errors::{FailureKind, FetchError};

/// The result of a fail-safe fetch.
///
/// `data` is always usable: on failure it holds the empty default (`[]` or an
/// empty [`Envelope`](crate::models::Envelope)) and `failure` records what
/// went wrong so the view can tell "no rows" apart from "request failed".
#[derive(Debug)]
pub struct Fetched<T> {
    pub data: T,
    pub failure: Option<FetchError>,
}

impl<T> Fetched<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data,
            failure: None,
        }
    }

    /// Empty result carrying `error`. The error is logged here, once.
    pub fn failed(error: FetchError) -> Self
    where
        T: Default,
    {
        warn!("Fetch failed ({}): {}", error.kind(), error);
        Self {
            data: T::default(),
            failure: Some(error),
        }
    }

    /// Folds a raw call result into a fail-safe one.
    pub fn settle(result: Result<T, FetchError>) -> Self
    where
        T: Default,
    {
        match result {
            Ok(data) => Self::ok(data),
            Err(error) => Self::failed(error),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure.as_ref().map(FetchError::kind)
    }

    /// Transforms the payload, keeping the failure metadata.
    pub fn map<U, F>(self, f: F) -> Fetched<U>
    where
        F: FnOnce(T) -> U,
    {
        Fetched {
            data: f(self.data),
            failure: self.failure,
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_ok() {
        let fetched = Fetched::settle(Ok(vec![1, 2, 3]));
        assert!(!fetched.is_failure());
        assert_eq!(fetched.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_settle_error_yields_default() {
        let fetched: Fetched<Vec<i32>> = Fetched::settle(Err(FetchError::Http {
            status: 500,
            url: "http://localhost/api/stock-data".to_string(),
        }));
        assert!(fetched.is_failure());
        assert!(fetched.data.is_empty());
        assert_eq!(fetched.failure_kind(), Some(FailureKind::Http));
    }

    #[test]
    fn test_map_keeps_failure() {
        let fetched: Fetched<Vec<i32>> = Fetched::failed(FetchError::Parse {
            url: "http://localhost/api/market-data".to_string(),
            message: "expected value".to_string(),
        });
        let mapped = fetched.map(|rows| rows.len());
        assert_eq!(mapped.data, 0);
        assert_eq!(mapped.failure_kind(), Some(FailureKind::Parse));
    }
}
