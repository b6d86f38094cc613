//! Release packager CLI entrypoint.
//!
//! Reads the build identity and metadata from flags or the CI environment,
//! then runs the packaging pipeline: resolve the version, compute the
//! archive name, stage the binary and assets, and publish the archive
//! atomically into the distribution directory.

use clap::Parser;
use relpack::cli::Cli;
use relpack::error::Result;
use relpack::identity::BuildIdentity;
use relpack::metadata::BuildMetadata;
use relpack::output::write_stderr_line;
use relpack::pipeline::{self, PipelineConfig};
use std::io::Write;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stderr: &mut dyn Write) -> Result<()> {
    let config = pipeline_config_for_cli(cli)?;

    // Dry-run mode: show what would be produced without side effects
    if cli.dry_run {
        return run_dry(&config, stderr);
    }

    pipeline::run(&config, stderr)?;
    Ok(())
}

/// Shows the resolved version and archive path without side effects.
fn run_dry(config: &PipelineConfig, stderr: &mut dyn Write) -> Result<()> {
    let archive_name = pipeline::resolved_name(config)?;

    write_stderr_line(stderr, "Dry run - no files will be written");
    write_stderr_line(stderr, "");
    write_stderr_line(stderr, format!("Version: {}", archive_name.version()));
    write_stderr_line(
        stderr,
        format!("Archive: {}", config.dist_dir.join(archive_name.filename())),
    );
    Ok(())
}

/// Builds the immutable pipeline configuration from parsed arguments.
///
/// This is the only place ambient CI state enters the program; the core
/// stages receive the configuration as an ordinary argument.
fn pipeline_config_for_cli(cli: &Cli) -> Result<PipelineConfig> {
    let identity = BuildIdentity {
        release_tag: cli.release_tag.clone(),
        branch_name: cli.branch.clone(),
        commit_hash: cli.commit.clone(),
    };
    let metadata = BuildMetadata::new(cli.product.clone(), cli.target.clone(), cli.job.clone())?;

    Ok(PipelineConfig {
        identity,
        metadata,
        binary_path: cli.binary.clone(),
        asset_dir: cli.assets.clone(),
        dist_dir: cli.dist_dir.clone(),
        quiet: cli.quiet,
    })
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relpack::error::PackageError;

    fn cli_for(args: &[&str]) -> Cli {
        let mut full = vec![
            "relpack",
            "--product",
            "svc",
            "--target",
            "linux-x64",
            "--job",
            "amd64",
            "--binary",
            "target/svc",
            "--assets",
            "ui",
            "--dist-dir",
            "/tmp/dist",
        ];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn exit_code_for_run_result_returns_zero_on_success() {
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Ok(()), &mut stderr);
        assert_eq!(exit_code, 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn exit_code_for_run_result_prints_error_and_returns_one() {
        let err = PackageError::InvalidIdentity {
            reason: "either a release tag or a branch name and commit hash is required".to_owned(),
        };

        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Err(err), &mut stderr);
        assert_eq!(exit_code, 1);

        let stderr_text = String::from_utf8(stderr).expect("stderr was not UTF-8");
        assert!(stderr_text.contains("invalid build identity"));
    }

    #[test]
    fn config_maps_identity_and_metadata_from_flags() {
        let cli = cli_for(&["--branch", "main", "--commit", "abcdef1234567"]);
        let config = pipeline_config_for_cli(&cli).expect("valid configuration");

        assert_eq!(config.identity.branch_name.as_deref(), Some("main"));
        assert_eq!(config.identity.commit_hash, "abcdef1234567");
        assert_eq!(config.metadata.product_name(), "svc");
        assert_eq!(config.metadata.target_platform(), "linux-x64");
        assert_eq!(config.metadata.job_name(), "amd64");
    }

    #[test]
    fn config_rejects_unsafe_metadata_before_any_filesystem_work() {
        let cli = {
            let mut cli = cli_for(&["--release-tag", "v1.0.0"]);
            cli.product = "bad/name".to_owned();
            cli
        };
        let err = pipeline_config_for_cli(&cli).expect_err("unsafe product must fail");
        assert!(matches!(err, PackageError::InvalidMetadata { .. }));
    }

    #[test]
    fn dry_run_reports_version_and_archive_path() {
        let cli = cli_for(&["--release-tag", "v1.2.0", "--dry-run"]);
        let mut stderr = Vec::new();

        run(&cli, &mut stderr).expect("dry run succeeds");

        let text = String::from_utf8(stderr).expect("stderr was not UTF-8");
        assert!(text.contains("Dry run"));
        assert!(text.contains("Version: v1.2.0"));
        assert!(text.contains("/tmp/dist/svc-v1.2.0-linux-x64-amd64.tar.gz"));
    }

    #[test]
    fn dry_run_with_invalid_identity_fails() {
        let cli = cli_for(&["--dry-run"]);
        let err = run(&cli, &mut Vec::new()).expect_err("missing identity must fail");
        assert!(matches!(err, PackageError::InvalidIdentity { .. }));
    }
}
