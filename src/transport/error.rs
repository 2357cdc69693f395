//! Error types for artifact transports.

use thiserror::Error;

/// Errors that can occur while fetching an artifact.
///
/// Every variant carries the URL that was attempted.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout fetching {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// Repository answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The URL cannot be mapped to an object-storage location.
    #[error("invalid object location {url}: {reason}")]
    InvalidLocation {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Object storage rejected or failed the request.
    #[error("object storage error fetching {url}: {message}")]
    ObjectStore {
        /// The URL that failed.
        url: String,
        /// Rendered SDK error chain.
        message: String,
    },
}

impl FetchError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates an invalid object location error.
    pub fn invalid_location(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLocation {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates an object storage error.
    pub fn object_store(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ObjectStore {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Returns the URL the failed fetch was attempting.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. }
            | Self::Timeout { url }
            | Self::HttpStatus { url, .. }
            | Self::InvalidLocation { url, .. }
            | Self::ObjectStore { url, .. } => url,
        }
    }
}
