//! User-Agent string for repository requests.

/// Default User-Agent for artifact downloads (identifies the tool and version).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("mvnget/{version} (maven-artifact-fetcher)")
}
