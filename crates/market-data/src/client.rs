//! HTTP client for the dashboard backend.

use log::debug;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client;

use crate::config::ClientConfig;
use crate::endpoints::Endpoint;
use crate::errors::FetchError;
use crate::fetched::Fetched;

/// Issues one GET per [`Endpoint`] value against the configured backend.
///
/// There is no retry, backoff or caching. Every call either decodes the body
/// into the endpoint's output type or reports a [`FetchError`].
#[derive(Clone, Debug)]
pub struct KrxClient {
    client: Client,
    base_url: String,
}

impl KrxClient {
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url,
        }
    }

    /// Client configured from `KRX_API_URL` / `KRX_REQUEST_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `endpoint`, without the query string.
    pub fn url_for<E: Endpoint>(&self, endpoint: &E) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Performs the request and decodes the body.
    ///
    /// Transport failures map to [`FetchError::Network`] or
    /// [`FetchError::Timeout`], non-2xx statuses to [`FetchError::Http`], and
    /// bodies that do not decode to [`FetchError::Parse`].
    pub async fn get<E: Endpoint>(&self, endpoint: &E) -> Result<E::Output, FetchError> {
        let url = self.url_for(endpoint);
        let query = endpoint.query();
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .query(&query)
            .send()
            .await
            .map_err(|e| FetchError::transport(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::transport(&url, e))?;

        serde_json::from_str(&body).map_err(|e| FetchError::Parse {
            url,
            message: e.to_string(),
        })
    }

    /// Fail-safe variant of [`get`](Self::get): never errors, logs the
    /// failure and returns the empty output alongside it.
    pub async fn fetch<E: Endpoint>(&self, endpoint: &E) -> Fetched<E::Output> {
        Fetched::settle(self.get(endpoint).await)
    }
}

impl Default for KrxClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
