//! Core HTTP client for the public market-data endpoints.
//!
//! The [`MarketClient`] struct is the entry point for fetching option chains
//! from NSE and OHLCV history from the chart API. It wraps
//! [`reqwest::Client`] with browser-like default headers, a request timeout,
//! and a typed `get` helper.
//!
//! Endpoint methods are added to `MarketClient` via `impl` blocks in the
//! [`crate::api`] module.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use crate::constants::{CHART_BASE_URL, DEFAULT_TIMEOUT_SECS, NSE_BASE_URL, USER_AGENT};
use crate::error::{ProviderErrorBody, Result, ScopeError};

/// HTTP client for NSE option chains and chart history.
///
/// # Example
///
/// ```no_run
/// use nse_scope::client::MarketClient;
///
/// # #[tokio::main]
/// # async fn main() -> nse_scope::error::Result<()> {
/// let client = MarketClient::new()?;
/// let expiries = client.get_expiry_dates("NIFTY").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MarketClient {
    http: reqwest::Client,
    /// Base URL for NSE requests (defaults to [`NSE_BASE_URL`]).
    nse_base_url: String,
    /// Base URL for chart requests (defaults to [`CHART_BASE_URL`]).
    chart_base_url: String,
}

impl MarketClient {
    /// Create a client against the public endpoints.
    pub fn new() -> Result<Self> {
        Self::with_base_urls(NSE_BASE_URL, CHART_BASE_URL)
    }

    /// Create a client pointing at custom base URLs.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_urls(
        nse_base_url: impl Into<String>,
        chart_base_url: impl Into<String>,
    ) -> Result<Self> {
        Self::with_timeout(
            nse_base_url,
            chart_base_url,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Like [`with_base_urls`](Self::with_base_urls) with an explicit timeout.
    pub fn with_timeout(
        nse_base_url: impl Into<String>,
        chart_base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            nse_base_url: nse_base_url.into().trim_end_matches('/').to_owned(),
            chart_base_url: chart_base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the NSE base URL.
    pub fn nse_base_url(&self) -> &str {
        &self.nse_base_url
    }

    /// Returns the chart base URL.
    pub fn chart_base_url(&self) -> &str {
        &self.chart_base_url
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Perform a GET request and deserialize the JSON response.
    pub async fn get<R: DeserializeOwned>(&self, url: Url) -> Result<R> {
        tracing::debug!(%url, "GET");

        let resp = self.http.get(url).send().await?;

        self.handle_response(resp).await
    }

    /// Build `{nse_base_url}{path}?{query}`.
    pub(crate) fn nse_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        build_url(&self.nse_base_url, path, query)
    }

    /// Build `{chart_base_url}{path}?{query}`.
    pub(crate) fn chart_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        build_url(&self.chart_base_url, path, query)
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Read a response, returning either the deserialized body or a `ScopeError`.
    async fn handle_response<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(ScopeError::Json)
        } else {
            let body = String::from_utf8_lossy(&bytes);
            Err(parse_error_body(status, &body))
        }
    }
}

fn build_url(base: &str, path: &str, query: &[(&str, &str)]) -> Result<Url> {
    let joined = if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    };
    if query.is_empty() {
        return Ok(Url::parse(&joined)?);
    }
    Ok(Url::parse_with_params(&joined, query)?)
}

/// Try to parse the chart API's JSON error envelope; fall back to a raw HTTP
/// status error.
pub(crate) fn parse_error_body(status: reqwest::StatusCode, body: &str) -> ScopeError {
    #[derive(serde::Deserialize)]
    struct Envelope {
        chart: Inner,
    }
    #[derive(serde::Deserialize)]
    struct Inner {
        error: Option<ProviderErrorBody>,
    }

    if let Ok(Envelope {
        chart: Inner { error: Some(err) },
    }) = serde_json::from_str::<Envelope>(body)
    {
        if err.code.is_some() || err.description.is_some() {
            return ScopeError::Provider(err);
        }
    }
    ScopeError::HttpStatus {
        status,
        body: body.to_owned(),
    }
}
