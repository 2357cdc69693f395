//! Error types for artifact location.

use thiserror::Error;

/// Errors raised while turning a descriptor into a download URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// A field required to build the repository path is empty.
    #[error("cannot resolve '{coordinate}': {field} is empty")]
    MissingField {
        /// Rendered coordinate of the descriptor
        coordinate: String,
        /// Name of the missing field
        field: &'static str,
    },
}

impl ResolutionError {
    /// Creates a `MissingField` error.
    #[must_use]
    pub fn missing_field(coordinate: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            coordinate: coordinate.into(),
            field,
        }
    }
}
