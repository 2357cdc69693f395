//! Error types for coordinate parsing.

use thiserror::Error;

/// Errors that can occur while parsing a coordinate string.
///
/// Every variant carries the offending input so callers can report it and
/// move on to the next coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Fewer than the three mandatory `group:artifact:version` fields.
    #[error(
        "invalid coordinate '{input}': expected at least 3 fields, found {found}\n  Suggestion: Use group:artifact:version[:classifier][@extension]"
    )]
    TooFewFields {
        /// The coordinate that failed to parse
        input: String,
        /// Number of colon-delimited fields found
        found: usize,
    },

    /// More fields than the grammar allows.
    #[error(
        "invalid coordinate '{input}': expected at most 4 fields, found {found}\n  Suggestion: Use group:artifact:version[:classifier][@extension]"
    )]
    TooManyFields {
        /// The coordinate that failed to parse
        input: String,
        /// Number of colon-delimited fields found
        found: usize,
    },

    /// A field was present but empty.
    #[error("invalid coordinate '{input}': {field} is empty")]
    EmptyField {
        /// The coordinate that failed to parse
        input: String,
        /// Name of the empty field
        field: &'static str,
    },
}

impl ParseError {
    /// Creates a `TooFewFields` error.
    #[must_use]
    pub fn too_few_fields(input: &str, found: usize) -> Self {
        Self::TooFewFields {
            input: input.to_string(),
            found,
        }
    }

    /// Creates a `TooManyFields` error.
    #[must_use]
    pub fn too_many_fields(input: &str, found: usize) -> Self {
        Self::TooManyFields {
            input: input.to_string(),
            found,
        }
    }

    /// Creates an `EmptyField` error.
    #[must_use]
    pub fn empty_field(input: &str, field: &'static str) -> Self {
        Self::EmptyField {
            input: input.to_string(),
            field,
        }
    }

    /// Returns the coordinate string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::TooFewFields { input, .. }
            | Self::TooManyFields { input, .. }
            | Self::EmptyField { input, .. } => input,
        }
    }
}
