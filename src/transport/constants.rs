//! Defaults for transport timeouts and S3 region discovery.

/// Default HTTP connect timeout (30 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default HTTP request timeout (5 minutes for large artifacts).
pub const READ_TIMEOUT_SECS: u64 = 300;

/// Region used when neither an explicit region nor instance metadata is available.
pub const DEFAULT_S3_REGION: &str = "ap-southeast-1";
