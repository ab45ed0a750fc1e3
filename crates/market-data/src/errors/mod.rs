//! Error types for the fetch adapter.
//!
//! This module provides:
//! - [`FetchError`]: everything that can go wrong between building a URL and
//!   holding a typed response
//! - [`FailureKind`]: the network / HTTP / parse taxonomy used for logging and
//!   for the view's failure message

mod kind;

pub use kind::FailureKind;

use thiserror::Error;

/// Errors raised by [`KrxClient::get`](crate::KrxClient::get).
///
/// The fail-safe [`KrxClient::fetch`](crate::KrxClient::fetch) never returns
/// these directly; it logs them and hands back an empty result instead.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {url}")]
    Timeout {
        /// The URL that was requested
        url: String,
    },

    /// The request failed before a response arrived.
    #[error("Network error for {url}: {source}")]
    Network {
        /// The URL that was requested
        url: String,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Http {
        /// Numeric HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The response body could not be decoded into the endpoint's type.
    #[error("Failed to parse response from {url}: {message}")]
    Parse {
        /// The URL that was requested
        url: String,
        /// Decoder message
        message: String,
    },
}

impl FetchError {
    /// Wraps a transport error, separating timeouts from other failures.
    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Network {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Returns the coarse failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use krx_dashboard_market_data::errors::{FailureKind, FetchError};
    ///
    /// let error = FetchError::Http { status: 502, url: "http://localhost/x".to_string() };
    /// assert_eq!(error.kind(), FailureKind::Http);
    /// ```
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Timeout { .. } | Self::Network { .. } => FailureKind::Network,
            Self::Http { .. } => FailureKind::Http,
            Self::Parse { .. } => FailureKind::Parse,
        }
    }

    /// The URL the failed request targeted.
    pub fn url(&self) -> &str {
        match self {
            Self::Timeout { url }
            | Self::Network { url, .. }
            | Self::Http { url, .. }
            | Self::Parse { url, .. } => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_network_failure() {
        let error = FetchError::Timeout {
            url: "http://localhost:8080/api/market-data".to_string(),
        };
        assert_eq!(error.kind(), FailureKind::Network);
    }

    #[test]
    fn test_http_status_is_http_failure() {
        let error = FetchError::Http {
            status: 500,
            url: "http://localhost:8080/api/stock-data".to_string(),
        };
        assert_eq!(error.kind(), FailureKind::Http);
    }

    #[test]
    fn test_parse_is_parse_failure() {
        let error = FetchError::Parse {
            url: "http://localhost:8080/api/bond/trading-info/TREASURY".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(error.kind(), FailureKind::Parse);
    }

    #[test]
    fn test_url_accessor() {
        let error = FetchError::Http {
            status: 404,
            url: "http://localhost/etf/trading-info".to_string(),
        };
        assert_eq!(error.url(), "http://localhost/etf/trading-info");
    }

    #[test]
    fn test_error_display() {
        let error = FetchError::Http {
            status: 503,
            url: "http://localhost/market-data".to_string(),
        };
        assert_eq!(format!("{}", error), "HTTP 503 from http://localhost/market-data");

        let error = FetchError::Parse {
            url: "http://localhost/stock-data".to_string(),
            message: "EOF while parsing".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to parse response from http://localhost/stock-data: EOF while parsing"
        );
    }

    #[test]
    fn test_failure_kind_labels() {
        assert_eq!(FailureKind::Network.to_string(), "network");
        assert_eq!(FailureKind::Http.as_str(), "http");
        assert_eq!(FailureKind::Parse.as_str(), "parse");
    }
}
