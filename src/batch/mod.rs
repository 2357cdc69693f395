//! Batch orchestration: parse, locate, fetch and persist each coordinate.
//!
//! Coordinates are processed one at a time, in input order. A failure on one
//! coordinate is recorded against it and never stops the batch.
//!
//! # Example
//!
//! ```no_run
//! use mvnget_core::batch::{BatchOptions, BatchRunner};
//! use mvnget_core::transport::TransportSettings;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = BatchOptions::new("https://repo1.maven.org/maven2", "./libs");
//! let runner = BatchRunner::from_options(options, &TransportSettings::default())?;
//! let summary = runner.run(&["org.slf4j:slf4j-api:2.0.13"]).await;
//! println!("{} succeeded, {} failed", summary.succeeded(), summary.failed());
//! # Ok(())
//! # }
//! ```

mod error;
mod outcome;

pub use error::{ItemError, WriteError};
pub use outcome::{BatchSummary, ItemOutcome, Outcome};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument, warn};

use crate::coordinate::{Credentials, parse_coordinate};
use crate::locator::{artifact_url, file_name, normalize_repository_url};
use crate::transport::{
    FetchedArtifact, Transport, TransportKind, TransportSettings, build_transport,
};

/// Run-wide settings for a batch.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    repository_url: String,
    output_dir: PathBuf,
    print_only: bool,
    credentials: Option<Credentials>,
}

impl BatchOptions {
    /// Creates options for `repository_url`, normalized to end with `/`.
    #[must_use]
    pub fn new(repository_url: &str, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            repository_url: normalize_repository_url(repository_url),
            output_dir: output_dir.into(),
            print_only: false,
            credentials: None,
        }
    }

    /// Only resolve URLs; no network and no file system access.
    #[must_use]
    pub fn print_only(mut self, print_only: bool) -> Self {
        self.print_only = print_only;
        self
    }

    /// Credentials attached to every descriptor in the batch.
    #[must_use]
    pub fn credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    #[must_use]
    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn is_print_only(&self) -> bool {
        self.print_only
    }

    /// Transport required by the configured repository.
    #[must_use]
    pub fn transport_kind(&self) -> TransportKind {
        TransportKind::for_repository(&self.repository_url)
    }
}

/// Processes coordinates against one repository with one bound transport.
pub struct BatchRunner {
    options: BatchOptions,
    transport: Arc<dyn Transport>,
}

impl BatchRunner {
    /// Creates a runner with an explicit transport.
    #[must_use]
    pub fn new(options: BatchOptions, transport: Arc<dyn Transport>) -> Self {
        Self { options, transport }
    }

    /// Creates a runner, selecting the transport from the repository scheme.
    ///
    /// # Errors
    ///
    /// Returns the reqwest builder error if the HTTP client cannot be created.
    pub fn from_options(
        options: BatchOptions,
        settings: &TransportSettings,
    ) -> Result<Self, reqwest::Error> {
        let kind = options.transport_kind();
        debug!(transport = %kind, repository = %options.repository_url, "selected transport");
        let transport = build_transport(kind, settings)?;
        Ok(Self::new(options, transport))
    }

    #[must_use]
    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Name of the bound transport.
    #[must_use]
    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Attempts every coordinate and returns one outcome per input, in order.
    #[instrument(skip(self, coordinates), fields(count = coordinates.len(), transport = self.transport.name()))]
    pub async fn run<S: AsRef<str>>(&self, coordinates: &[S]) -> BatchSummary {
        let mut outcomes = Vec::with_capacity(coordinates.len());

        for coordinate in coordinates {
            let coordinate = coordinate.as_ref();
            let result = self.process(coordinate).await;
            match &result {
                Ok(Outcome::Downloaded { url, path, bytes }) => {
                    info!(coordinate, url = %url, path = %path.display(), bytes, "finished download");
                }
                Ok(Outcome::Resolved { url }) => {
                    debug!(coordinate, url = %url, "resolved");
                }
                Err(error) => {
                    warn!(coordinate, kind = error.kind(), error = %error, "artifact failed");
                }
            }
            outcomes.push(ItemOutcome {
                coordinate: coordinate.to_string(),
                result,
            });
        }

        let summary = BatchSummary::new(outcomes);
        info!(
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            total = summary.total(),
            "batch complete"
        );
        summary
    }

    async fn process(&self, coordinate: &str) -> Result<Outcome, ItemError> {
        let descriptor = parse_coordinate(coordinate)?
            .with_repository(self.options.repository_url.as_str())
            .with_credentials(self.options.credentials.clone());

        let url = artifact_url(&descriptor)?;
        if self.options.print_only {
            return Ok(Outcome::Resolved { url });
        }

        let path = self.options.output_dir.join(file_name(&descriptor));
        // Left in place if the fetch or copy below fails.
        let file = File::create(&path)
            .await
            .map_err(|e| WriteError::create(&path, e))?;

        let artifact = self.transport.fetch(&url, descriptor.credentials()).await?;
        let bytes = write_artifact(file, artifact, &path).await?;

        Ok(Outcome::Downloaded { url, path, bytes })
    }
}

/// Streams the artifact body into `file`, returning bytes written.
///
/// The file and the body stream are both dropped on return.
async fn write_artifact(
    file: File,
    artifact: FetchedArtifact,
    path: &Path,
) -> Result<u64, WriteError> {
    let FetchedArtifact {
        mut body,
        content_length,
    } = artifact;
    let mut writer = BufWriter::new(file);
    let mut bytes_written: u64 = 0;

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| WriteError::copy(path, e))?;
        writer
            .write_all(&chunk)
            .await
            .map_err(|e| WriteError::copy(path, e))?;
        bytes_written += chunk.len() as u64;
    }

    writer
        .flush()
        .await
        .map_err(|e| WriteError::copy(path, e))?;

    if let Some(expected) = content_length
        && bytes_written < expected
    {
        return Err(WriteError::short_write(path, expected, bytes_written));
    }

    Ok(bytes_written)
}
