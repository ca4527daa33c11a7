//! Error types for the `nse-scope` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, ScopeError>`.
//!
//! [`ScopeError`] covers:
//! - **Input validation**: Empty or unordered price series, malformed chain rows, bad parameters
//! - **Domain errors**: Greeks requested for degenerate inputs (σ = 0, T = 0, K = 0, …)
//! - **Provider errors**: Structured error objects returned by a data source
//! - **HTTP status errors**: Unexpected status codes with response body
//! - **HTTP transport errors**: Network, TLS, timeout failures
//! - **JSON errors**: Deserialization failures
//! - **URL errors**: Malformed URL construction

use std::fmt;

/// Structured error object returned by the chart endpoint.
///
/// Yahoo wraps failures as `{"chart": {"result": null, "error": {...}}}`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProviderErrorBody {
    /// Short error code (e.g. "Not Found").
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable description of the error.
    #[serde(default)]
    pub description: Option<String>,
}

impl fmt::Display for ProviderErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.code.as_deref().unwrap_or("UNKNOWN"),
            self.description.as_deref().unwrap_or("No description"),
        )
    }
}

/// All possible errors produced by `nse-scope`.
#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    /// Input data or parameters failed validation.
    #[error("Invalid input: {0}")]
    InputValidation(String),

    /// A numeric model was evaluated outside its domain.
    #[error("Domain error: {0}")]
    Domain(String),

    /// A data provider answered with a structured error.
    #[error("Provider error: {0}")]
    Provider(ProviderErrorBody),

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl ScopeError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InputValidation(msg.into())
    }

    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScopeError>;
