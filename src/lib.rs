//! mvnget Core Library
//!
//! Resolves Maven-style coordinates (`group:artifact:version[:classifier][@extension]`)
//! into repository URLs and fetches the artifacts from an HTTP(S) or S3
//! repository into a local directory.
//!
//! # Architecture
//!
//! - [`coordinate`] - Coordinate parsing into [`ArtifactDescriptor`]
//! - [`locator`] - Maven repository layout: file names and download URLs
//! - [`transport`] - HTTP and S3 retrieval behind the [`Transport`] trait
//! - [`batch`] - Sequential batch orchestration with per-item outcomes

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod batch;
pub mod coordinate;
pub mod locator;
pub mod transport;
mod user_agent;

// Re-export commonly used types
pub use batch::{BatchOptions, BatchRunner, BatchSummary, ItemError, ItemOutcome, Outcome};
pub use coordinate::{ArtifactDescriptor, Credentials, ParseError, parse_coordinate};
pub use locator::{
    DEFAULT_REPOSITORY_URL, ResolutionError, artifact_url, file_name, normalize_repository_url,
};
pub use transport::{FetchError, Transport, TransportKind, TransportSettings};
