//! Maven repository layout: file names, repository paths and download URLs.
//!
//! Artifacts live at `group/as/path/artifact/version/artifact-version[-classifier].extension`
//! relative to the repository root.

mod error;

pub use error::ResolutionError;

use crate::coordinate::ArtifactDescriptor;

/// Public Maven Central base URL.
pub const DEFAULT_REPOSITORY_URL: &str = "https://repo1.maven.org/maven2/";

/// Ensures a repository base URL ends with `/`.
#[must_use]
pub fn normalize_repository_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

/// Returns the artifact's file name, e.g. `lib-1.0-sources.jar`.
#[must_use]
pub fn file_name(descriptor: &ArtifactDescriptor) -> String {
    match descriptor.classifier() {
        Some(classifier) => format!(
            "{}-{}-{}.{}",
            descriptor.artifact(),
            descriptor.version(),
            classifier,
            descriptor.extension()
        ),
        None => format!(
            "{}-{}.{}",
            descriptor.artifact(),
            descriptor.version(),
            descriptor.extension()
        ),
    }
}

/// Returns the repository-relative path of the artifact.
///
/// # Errors
///
/// Returns [`ResolutionError::MissingField`] when `group`, `artifact` or
/// `version` is empty.
pub fn artifact_path(descriptor: &ArtifactDescriptor) -> Result<String, ResolutionError> {
    let required = [
        ("group", descriptor.group()),
        ("artifact", descriptor.artifact()),
        ("version", descriptor.version()),
    ];
    if let Some(field) = required
        .iter()
        .find_map(|(field, value)| value.is_empty().then_some(*field))
    {
        return Err(ResolutionError::missing_field(descriptor.to_string(), field));
    }

    Ok(format!(
        "{}/{}/{}/{}",
        descriptor.group().replace('.', "/"),
        descriptor.artifact(),
        descriptor.version(),
        file_name(descriptor)
    ))
}

/// Returns the fully-qualified download URL of the artifact.
///
/// # Errors
///
/// Returns [`ResolutionError::MissingField`] when the repository URL or any
/// of `group`, `artifact`, `version` is empty.
pub fn artifact_url(descriptor: &ArtifactDescriptor) -> Result<String, ResolutionError> {
    if descriptor.repository_url().is_empty() {
        return Err(ResolutionError::missing_field(
            descriptor.to_string(),
            "repository URL",
        ));
    }
    let path = artifact_path(descriptor)?;
    Ok(format!("{}{path}", descriptor.repository_url()))
}
