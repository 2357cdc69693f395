//! Per-artifact error types recorded by the batch orchestrator.

use std::path::PathBuf;

use thiserror::Error;

use crate::coordinate::ParseError;
use crate::locator::ResolutionError;
use crate::transport::FetchError;

/// Failure writing an artifact to its destination.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The destination file could not be created or truncated.
    #[error("cannot create {path}: {source}")]
    Create {
        /// Destination path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Reading the body or writing it to disk failed part-way.
    #[error("copy to {path} failed: {source}")]
    Copy {
        /// Destination path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Fewer bytes arrived than the repository declared.
    #[error("short write to {path}: expected {expected_bytes} bytes, wrote {actual_bytes}")]
    ShortWrite {
        /// Destination path.
        path: PathBuf,
        /// Declared content length.
        expected_bytes: u64,
        /// Bytes actually written.
        actual_bytes: u64,
    },
}

impl WriteError {
    /// Creates a `Create` error.
    pub fn create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Create {
            path: path.into(),
            source,
        }
    }

    /// Creates a `Copy` error.
    pub fn copy(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Copy {
            path: path.into(),
            source,
        }
    }

    /// Creates a `ShortWrite` error.
    pub fn short_write(path: impl Into<PathBuf>, expected_bytes: u64, actual_bytes: u64) -> Self {
        Self::ShortWrite {
            path: path.into(),
            expected_bytes,
            actual_bytes,
        }
    }
}

/// Why a single coordinate did not complete.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

impl ItemError {
    /// Stable label for logs and summaries.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse",
            Self::Resolution(_) => "resolution",
            Self::Fetch(_) => "fetch",
            Self::Write(_) => "write",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_short_write_display() {
        let error = WriteError::short_write("/tmp/lib-1.0.jar", 100, 40);
        let msg = error.to_string();
        assert!(msg.contains("/tmp/lib-1.0.jar"), "Expected path in: {msg}");
        assert!(msg.contains("100"), "Expected declared length in: {msg}");
        assert!(msg.contains("40"), "Expected written bytes in: {msg}");
    }

    #[test]
    fn test_item_error_kind_labels() {
        let parse: ItemError = ParseError::too_few_fields("a", 1).into();
        assert_eq!(parse.kind(), "parse");

        let resolution: ItemError = ResolutionError::missing_field("a:b:c", "group").into();
        assert_eq!(resolution.kind(), "resolution");

        let fetch: ItemError = FetchError::http_status("https://x/a.jar", 404).into();
        assert_eq!(fetch.kind(), "fetch");

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let write: ItemError = WriteError::create("/nope/a.jar", io).into();
        assert_eq!(write.kind(), "write");
    }

    #[test]
    fn test_item_error_is_transparent() {
        let inner = FetchError::http_status("https://x/a.jar", 503);
        let expected = inner.to_string();
        let error = ItemError::from(inner);
        assert_eq!(error.to_string(), expected);
    }
}
