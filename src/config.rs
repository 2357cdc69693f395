//! Run configuration: CLI flags and environment resolved into library options.

use anyhow::{Context, Result};
use tracing::warn;

use mvnget_core::{BatchOptions, Credentials, TransportSettings};

use crate::cli::Args;

/// Everything the batch needs, resolved from the command line.
#[derive(Debug)]
pub(crate) struct RunConfig {
    pub(crate) batch: BatchOptions,
    pub(crate) transport: TransportSettings,
}

impl RunConfig {
    /// Resolves defaults. The output directory is not checked here; an
    /// unusable one surfaces as a per-coordinate write failure.
    pub(crate) fn from_args(args: &Args) -> Result<Self> {
        let output_dir = match &args.output_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("cannot determine working directory")?,
        };

        let credentials =
            Credentials::from_parts(args.repo_user.as_deref(), args.repo_password.as_deref());
        if credentials.is_none() && (args.repo_user.is_some() || args.repo_password.is_some()) {
            warn!("ignoring incomplete repository credentials; both user and password are required");
        }

        let batch = BatchOptions::new(&args.mvn_server, output_dir)
            .print_only(args.print_only)
            .credentials(credentials);

        let transport = TransportSettings {
            connect_timeout_secs: args.connect_timeout,
            read_timeout_secs: args.read_timeout,
            s3_region: args
                .s3_region
                .as_deref()
                .map(str::trim)
                .filter(|region| !region.is_empty())
                .map(str::to_string),
            s3_endpoint: args
                .s3_endpoint
                .as_deref()
                .map(str::trim)
                .filter(|endpoint| !endpoint.is_empty())
                .map(str::to_string),
        };

        Ok(Self { batch, transport })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;
    use mvnget_core::TransportKind;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["mvnget"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_config_normalizes_repository_and_keeps_output_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_str().unwrap();
        let args = parse(&["--mvn-server", "https://nexus.example.com/releases", "-o", dir]);

        let config = RunConfig::from_args(&args).unwrap();

        assert_eq!(
            config.batch.repository_url(),
            "https://nexus.example.com/releases/"
        );
        assert_eq!(config.batch.output_dir(), temp.path());
        assert_eq!(config.batch.transport_kind(), TransportKind::Http);
    }

    #[test]
    fn test_config_missing_output_dir_is_left_to_the_batch() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let args = parse(&["-o", missing.to_str().unwrap(), "g:a:1"]);

        let config = RunConfig::from_args(&args).unwrap();
        assert_eq!(config.batch.output_dir(), missing.as_path());
    }

    #[test]
    fn test_config_print_only_skips_output_dir_check() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let args = parse(&["--print-only", "-o", missing.to_str().unwrap()]);

        let config = RunConfig::from_args(&args).unwrap();
        assert!(config.batch.is_print_only());
    }

    #[test]
    fn test_config_s3_repository_and_region() {
        let temp = TempDir::new().unwrap();
        let args = parse(&[
            "--mvn-server",
            "s3://my-bucket/repo",
            "--s3-region",
            " eu-central-1 ",
            "--s3-endpoint",
            "http://localhost:9000",
            "-o",
            temp.path().to_str().unwrap(),
        ]);

        let config = RunConfig::from_args(&args).unwrap();
        assert_eq!(config.batch.transport_kind(), TransportKind::S3);
        assert_eq!(config.transport.s3_region.as_deref(), Some("eu-central-1"));
        assert_eq!(
            config.transport.s3_endpoint.as_deref(),
            Some("http://localhost:9000")
        );
    }

    #[test]
    fn test_config_timeouts_flow_into_transport_settings() {
        let temp = TempDir::new().unwrap();
        let args = parse(&[
            "--connect-timeout",
            "5",
            "--read-timeout",
            "60",
            "-o",
            temp.path().to_str().unwrap(),
        ]);

        let config = RunConfig::from_args(&args).unwrap();
        assert_eq!(config.transport.connect_timeout_secs, 5);
        assert_eq!(config.transport.read_timeout_secs, 60);
    }
}
