//! CLI argument definitions for the release packager.
//!
//! This module defines the command-line interface using clap. It is
//! separated from the main entrypoint to keep the binary small and focused
//! on orchestration. Every identity and metadata flag has an
//! environment-variable fallback so CI jobs can configure a run without
//! templating the command line.

use camino::Utf8PathBuf;
use clap::Parser;

/// Package a built binary and its static assets into a release archive.
#[derive(Parser, Debug, Clone)]
#[command(name = "relpack")]
#[command(version, about)]
#[command(long_about = concat!(
    "Package a built binary and its static assets into a versioned release archive.\n\n",
    "The version is the release tag when one is set, otherwise ",
    "<branch>-<short commit> with the commit hash truncated to seven ",
    "characters. The archive is named ",
    "<product>-<version>-<target>-<job>.tar.gz and extracting it reproduces ",
    "the product binary and the ui/ asset tree directly.\n\n",
    "The archive is written to the distribution directory through a ",
    "temporary file and an atomic rename, so a partially written archive is ",
    "never visible under its final name, even if the run is interrupted.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Package a tagged release:\n",
    "    $ relpack --release-tag v1.2.0 --product svc --target linux-arm64 \\\n",
    "        --job aarch64 --binary target/svc --assets ui --dist-dir /tmp/dist\n\n",
    "  Package a branch build (version becomes main-<short commit>):\n",
    "    $ relpack --branch main --commit abcdef1234567 --product svc \\\n",
    "        --target linux-x64 --job amd64 --binary target/svc --assets ui \\\n",
    "        --dist-dir /tmp/dist\n\n",
    "  Preview the archive name without writing anything:\n",
    "    $ relpack --dry-run --release-tag v1.2.0 --product svc \\\n",
    "        --target linux-x64 --job amd64 --binary target/svc --assets ui \\\n",
    "        --dist-dir /tmp/dist\n",
))]
pub struct Cli {
    /// Explicit release tag; takes precedence over --branch/--commit.
    #[arg(long, env = "RELEASE_TAG", value_name = "TAG")]
    pub release_tag: Option<String>,

    /// Branch the built commit belongs to (used when no tag is set).
    #[arg(long, env = "BRANCH_NAME", value_name = "NAME")]
    pub branch: Option<String>,

    /// Commit hash of the built revision (at least 7 characters).
    #[arg(long, env = "COMMIT_HASH", value_name = "SHA", default_value = "")]
    pub commit: String,

    /// Product name; also the name the binary takes inside the archive.
    #[arg(long, env = "PRODUCT_NAME", value_name = "NAME")]
    pub product: String,

    /// Target platform identifier (e.g. "linux-arm64").
    #[arg(long, env = "TARGET_PLATFORM", value_name = "TARGET")]
    pub target: String,

    /// CI job identifier distinguishing builds of the same target.
    #[arg(long, env = "JOB_NAME", value_name = "NAME")]
    pub job: String,

    /// Path to the compiled binary.
    #[arg(long, value_name = "FILE")]
    pub binary: Utf8PathBuf,

    /// Path to the static asset directory (archived under "ui/").
    #[arg(long, value_name = "DIR")]
    pub assets: Utf8PathBuf,

    /// Distribution directory receiving the final archive.
    #[arg(long, env = "DIST_DIR", value_name = "DIR")]
    pub dist_dir: Utf8PathBuf,

    /// Print the resolved version and archive name, then exit.
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress output (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["relpack"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    const REQUIRED: &[&str] = &[
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

    #[test]
    fn parses_tagged_release_invocation() {
        let mut args = vec!["--release-tag", "v1.2.0"];
        args.extend_from_slice(REQUIRED);
        let cli = parse(&args);

        assert_eq!(cli.release_tag.as_deref(), Some("v1.2.0"));
        assert!(cli.branch.is_none());
        assert!(cli.commit.is_empty());
        assert_eq!(cli.product, "svc");
        assert_eq!(cli.dist_dir, Utf8PathBuf::from("/tmp/dist"));
    }

    #[test]
    fn parses_branch_build_invocation() {
        let mut args = vec!["--branch", "main", "--commit", "abcdef1234567"];
        args.extend_from_slice(REQUIRED);
        let cli = parse(&args);

        assert!(cli.release_tag.is_none());
        assert_eq!(cli.branch.as_deref(), Some("main"));
        assert_eq!(cli.commit, "abcdef1234567");
    }

    #[test]
    fn dry_run_and_quiet_default_to_off() {
        let cli = parse(REQUIRED);
        assert!(!cli.dry_run);
        assert!(!cli.quiet);
    }

    #[test]
    fn quiet_accepts_short_flag() {
        let mut args = vec!["-q"];
        args.extend_from_slice(REQUIRED);
        assert!(parse(&args).quiet);
    }

    #[test]
    fn missing_product_is_a_parse_error() {
        let result = Cli::try_parse_from([
            "relpack",
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
        ]);
        assert!(result.is_err());
    }
}
