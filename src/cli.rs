//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use mvnget_core::DEFAULT_REPOSITORY_URL;
use mvnget_core::transport::constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};

/// Fetch Maven artifacts by coordinate from HTTP or S3 repositories.
///
/// Each COORDINATE has the form group:artifact:version[:classifier][@extension].
#[derive(Parser, Debug)]
#[command(name = "mvnget")]
#[command(author, version, about)]
pub struct Args {
    /// Artifact coordinates to fetch
    #[arg(value_name = "COORDINATE")]
    pub coordinates: Vec<String>,

    /// Repository base URL (http://, https:// or s3://bucket/prefix/)
    #[arg(long = "mvn-server", env = "MVNGET_SERVER", default_value = DEFAULT_REPOSITORY_URL)]
    pub mvn_server: String,

    /// Directory to save downloaded files to; must exist (default: current directory)
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// Only print the resolved URLs; nothing is downloaded or written
    #[arg(long)]
    pub print_only: bool,

    /// Suppress log output (RUST_LOG, when set, takes precedence)
    #[arg(short, long, alias = "quite")]
    pub quiet: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Repository user for HTTP Basic authentication
    #[arg(long, env = "MVNGET_REPO_USER")]
    pub repo_user: Option<String>,

    /// Repository password for HTTP Basic authentication
    #[arg(long, env = "MVNGET_REPO_PASSWORD", hide_env_values = true)]
    pub repo_password: Option<String>,

    /// S3 region; skips instance-metadata region discovery
    #[arg(long, env = "MVNGET_S3_REGION")]
    pub s3_region: Option<String>,

    /// S3-compatible endpoint URL; buckets are addressed path-style
    #[arg(long, env = "MVNGET_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// HTTP connect timeout in seconds (1-3600)
    #[arg(long, default_value_t = CONNECT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub connect_timeout: u64,

    /// Longest HTTP wait for more response data, in seconds (1-3600)
    #[arg(long, default_value_t = READ_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub read_timeout: u64,
}
