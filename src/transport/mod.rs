//! Transports that turn a resolved artifact URL into a byte stream.
//!
//! # Architecture
//!
//! - [`Transport`] - Async trait implemented by each retrieval mechanism
//! - [`HttpTransport`] - Plain HTTP(S) GET, optionally with Basic auth
//! - [`S3Transport`] - S3 `GetObject` with instance-metadata region discovery
//! - [`TransportKind`] - Which implementation a repository URL calls for
//!
//! The kind is decided once from the repository URL and the resulting
//! transport object is bound for the entire batch.
//!
//! # Example
//!
//! ```no_run
//! use mvnget_core::transport::{TransportKind, TransportSettings, build_transport};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let kind = TransportKind::for_repository("https://repo1.maven.org/maven2/");
//! let transport = build_transport(kind, &TransportSettings::default())?;
//! let artifact = transport
//!     .fetch("https://repo1.maven.org/maven2/org/example/lib/1.0/lib-1.0.jar", None)
//!     .await?;
//! println!("content length: {:?}", artifact.content_length);
//! # Ok(())
//! # }
//! ```

pub mod constants;
mod error;
mod http;
mod s3;

pub use error::FetchError;
pub use http::HttpTransport;
pub use s3::{S3Location, S3Transport};

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;
use url::Url;

use crate::coordinate::Credentials;
use constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};

/// Artifact body as a stream of chunks.
pub type BodyStream = BoxStream<'static, Result<Bytes, std::io::Error>>;

/// A successful fetch: the body stream and the declared length, if any.
pub struct FetchedArtifact {
    pub body: BodyStream,
    pub content_length: Option<u64>,
}

impl FetchedArtifact {
    #[must_use]
    pub fn new(body: BodyStream, content_length: Option<u64>) -> Self {
        Self {
            body,
            content_length,
        }
    }
}

impl fmt::Debug for FetchedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchedArtifact")
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// A retrieval mechanism for artifact bytes.
///
/// Implementations perform exactly one attempt per call.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Opens the artifact at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the repository cannot be reached or
    /// refuses the request.
    async fn fetch(
        &self,
        url: &str,
        credentials: Option<&Credentials>,
    ) -> Result<FetchedArtifact, FetchError>;
}

/// Which transport a repository URL requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Http,
    S3,
}

impl TransportKind {
    /// `s3://` repositories use object storage; anything else goes over HTTP.
    #[must_use]
    pub fn for_repository(repository_url: &str) -> Self {
        match Url::parse(repository_url.trim()) {
            Ok(url) if url.scheme() == "s3" => Self::S3,
            _ => Self::Http,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::S3 => "s3",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Knobs shared by the transport implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSettings {
    pub connect_timeout_secs: u64,
    /// Longest wait between two reads of a response, not a total deadline.
    pub read_timeout_secs: u64,
    /// Skips instance-metadata discovery when set.
    pub s3_region: Option<String>,
    /// S3-compatible endpoint, addressed path-style.
    pub s3_endpoint: Option<String>,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
            read_timeout_secs: READ_TIMEOUT_SECS,
            s3_region: None,
            s3_endpoint: None,
        }
    }
}

/// Builds the transport for `kind`.
///
/// # Errors
///
/// Returns the reqwest builder error if the HTTP client cannot be created.
pub fn build_transport(
    kind: TransportKind,
    settings: &TransportSettings,
) -> Result<Arc<dyn Transport>, reqwest::Error> {
    Ok(match kind {
        TransportKind::Http => Arc::new(HttpTransport::new(settings)?),
        TransportKind::S3 => Arc::new(S3Transport::new(settings)),
    })
}
