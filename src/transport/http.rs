//! Plain HTTP(S) repository transport.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tracing::{debug, instrument};

use super::error::FetchError;
use super::{FetchedArtifact, Transport, TransportSettings};
use crate::coordinate::Credentials;
use crate::user_agent;

/// Fetches artifacts with a single GET per URL.
///
/// The underlying client is built once and reused for the whole batch, so
/// connections to the repository are pooled.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds the transport with the configured timeouts.
    ///
    /// The read timeout bounds the silence between two reads; a body that
    /// keeps arriving is never cut off, however long the transfer takes.
    ///
    /// # Errors
    ///
    /// Returns the reqwest builder error if the TLS backend or client
    /// configuration cannot be initialised.
    pub fn new(settings: &TransportSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .read_timeout(Duration::from_secs(settings.read_timeout_secs))
            .user_agent(user_agent::default_user_agent())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    #[instrument(skip(self, credentials), fields(url = %url, authenticated = credentials.is_some()))]
    async fn fetch(
        &self,
        url: &str,
        credentials: Option<&Credentials>,
    ) -> Result<FetchedArtifact, FetchError> {
        let mut request = self.client.get(url);
        if let Some(credentials) = credentials {
            request = request.basic_auth(credentials.user(), Some(credentials.password()));
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::timeout(url)
            } else {
                FetchError::network(url, e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(url, status.as_u16()));
        }

        let content_length = response.content_length();
        debug!(status = status.as_u16(), ?content_length, "response received");

        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(std::io::Error::other))
            .boxed();
        Ok(FetchedArtifact::new(body, content_length))
    }
}
