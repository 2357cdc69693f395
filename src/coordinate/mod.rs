//! Coordinate parsing for Maven-style artifact identifiers.
//!
//! A coordinate has the shape `group:artifact:version[:classifier][@extension]`.
//! The `@extension` suffix may only be attached to the last field.
//!
//! # Example
//!
//! ```
//! use mvnget_core::coordinate::parse_coordinate;
//!
//! let descriptor = parse_coordinate("org.example:lib:1.0:sources@zip").unwrap();
//! assert_eq!(descriptor.group(), "org.example");
//! assert_eq!(descriptor.classifier(), Some("sources"));
//! assert_eq!(descriptor.extension(), "zip");
//! ```

mod credentials;
mod error;

pub use credentials::Credentials;
pub use error::ParseError;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

/// Extension used when a coordinate carries no `@extension` suffix.
pub const DEFAULT_EXTENSION: &str = "jar";

const FIELD_NAMES: [&str; 4] = ["group", "artifact", "version", "classifier"];

/// A single artifact to fetch, plus the repository context it is fetched from.
///
/// `group`, `artifact` and `version` are fixed once constructed. The
/// repository URL and credentials are attached afterwards by the batch
/// orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    group: String,
    artifact: String,
    version: String,
    classifier: Option<String>,
    extension: String,
    repository_url: String,
    credentials: Option<Credentials>,
}

impl ArtifactDescriptor {
    /// Creates a descriptor with the default extension and no repository.
    ///
    /// No validation happens here; [`parse_coordinate`] is the validating
    /// entry point.
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            classifier: None,
            extension: DEFAULT_EXTENSION.to_string(),
            repository_url: String::new(),
            credentials: None,
        }
    }

    /// Sets the classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Overrides the file extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Attaches the repository base URL. Callers pass a normalized URL
    /// ending in `/`.
    #[must_use]
    pub fn with_repository(mut self, repository_url: impl Into<String>) -> Self {
        self.repository_url = repository_url.into();
        self
    }

    /// Attaches repository credentials.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Repository base URL; empty until attached.
    #[must_use]
    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}

impl fmt::Display for ArtifactDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        if self.extension != DEFAULT_EXTENSION {
            write!(f, "@{}", self.extension)?;
        }
        Ok(())
    }
}

impl FromStr for ArtifactDescriptor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s)
    }
}

/// Parses a coordinate string into an [`ArtifactDescriptor`].
///
/// # Errors
///
/// Returns [`ParseError`] when the input has fewer than 3 or more than 4
/// colon-delimited fields, or when any field (including an `@extension`
/// suffix) is empty.
pub fn parse_coordinate(input: &str) -> Result<ArtifactDescriptor, ParseError> {
    let mut fields: Vec<&str> = input.trim().split(':').map(str::trim).collect();

    if fields.len() < 3 {
        return Err(ParseError::too_few_fields(input, fields.len()));
    }
    if fields.len() > FIELD_NAMES.len() {
        return Err(ParseError::too_many_fields(input, fields.len()));
    }

    let mut extension = None;
    let last_index = fields.len() - 1;
    let last: &str = fields[last_index];
    if let Some((value, ext)) = last.split_once('@') {
        if ext.is_empty() {
            return Err(ParseError::empty_field(input, "extension"));
        }
        extension = Some(ext);
        fields[last_index] = value;
    }

    for (value, name) in fields.iter().zip(FIELD_NAMES) {
        if value.is_empty() {
            return Err(ParseError::empty_field(input, name));
        }
    }

    let mut descriptor = ArtifactDescriptor::new(fields[0], fields[1], fields[2]);
    if let Some(classifier) = fields.get(3) {
        descriptor = descriptor.with_classifier(*classifier);
    }
    if let Some(ext) = extension {
        descriptor = descriptor.with_extension(ext);
    }

    debug!(coordinate = %descriptor, "parsed coordinate");
    Ok(descriptor)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_fields_defaults() {
        let d = parse_coordinate("org.example:lib:1.0").unwrap();
        assert_eq!(d.group(), "org.example");
        assert_eq!(d.artifact(), "lib");
        assert_eq!(d.version(), "1.0");
        assert_eq!(d.classifier(), None);
        assert_eq!(d.extension(), "jar");
        assert_eq!(d.repository_url(), "", "parser must not set repository");
    }

    #[test]
    fn test_parse_classifier_and_extension() {
        let d = parse_coordinate("org.example:lib:1.0:sources@zip").unwrap();
        assert_eq!(d.classifier(), Some("sources"));
        assert_eq!(d.extension(), "zip");
    }

    #[test]
    fn test_parse_extension_on_version_field() {
        let d = parse_coordinate("org.example:lib:1.0@pom").unwrap();
        assert_eq!(d.version(), "1.0");
        assert_eq!(d.classifier(), None);
        assert_eq!(d.extension(), "pom");
    }

    #[test]
    fn test_parse_classifier_without_extension() {
        let d = parse_coordinate("org.example:lib:1.0:javadoc").unwrap();
        assert_eq!(d.classifier(), Some("javadoc"));
        assert_eq!(d.extension(), "jar");
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let d = parse_coordinate("  org.example:lib:1.0\n").unwrap();
        assert_eq!(d.version(), "1.0");
    }

    #[test]
    fn test_parse_at_sign_in_earlier_field_is_kept() {
        let d = parse_coordinate("org.example:lib@x:1.0").unwrap();
        assert_eq!(d.artifact(), "lib@x");
        assert_eq!(d.extension(), "jar");
    }

    #[test]
    fn test_parse_too_few_fields() {
        for input in ["", "org.example", "org.example:lib"] {
            let err = parse_coordinate(input).unwrap_err();
            assert!(
                matches!(err, ParseError::TooFewFields { .. }),
                "expected TooFewFields for {input:?}, got {err:?}"
            );
            assert_eq!(err.input(), input);
        }
    }

    #[test]
    fn test_parse_too_many_fields() {
        let err = parse_coordinate("a:b:c:d:e").unwrap_err();
        assert!(matches!(err, ParseError::TooManyFields { found: 5, .. }));
    }

    #[test]
    fn test_parse_empty_fields_rejected() {
        let cases = [
            (":lib:1.0", "group"),
            ("org.example::1.0", "artifact"),
            ("org.example:lib:", "version"),
            ("org.example:lib:1.0:", "classifier"),
            ("org.example:lib:@zip", "version"),
            ("org.example:lib:1.0:@zip", "classifier"),
            ("org.example:lib:1.0@", "extension"),
        ];
        for (input, expected) in cases {
            match parse_coordinate(input) {
                Err(ParseError::EmptyField { field, .. }) => {
                    assert_eq!(field, expected, "wrong field for {input:?}");
                }
                other => panic!("expected EmptyField for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_display_renders_canonical_coordinate() {
        let plain = parse_coordinate("org.example:lib:1.0@jar").unwrap();
        assert_eq!(plain.to_string(), "org.example:lib:1.0");

        let full = parse_coordinate("org.example:lib:1.0:sources@zip").unwrap();
        assert_eq!(full.to_string(), "org.example:lib:1.0:sources@zip");
    }

    #[test]
    fn test_from_str_delegates_to_parser() {
        let d: ArtifactDescriptor = "org.example:lib:2.1".parse().unwrap();
        assert_eq!(d.version(), "2.1");
        assert!("bad".parse::<ArtifactDescriptor>().is_err());
    }
}
