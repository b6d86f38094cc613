//! Packaging pipeline orchestration.
//!
//! Chains the four stages — version resolution, archive naming, staging,
//! and archive writing — as an explicit sequence of typed values. Each
//! stage returns the value the next one consumes; there is no shared
//! mutable state and no internal retry.

use crate::archive::write_archive;
use crate::error::Result;
use crate::identity::BuildIdentity;
use crate::metadata::BuildMetadata;
use crate::naming::ArchiveName;
use crate::output::{success_message, write_stderr_line};
use crate::staging::StagingRoot;
use crate::version::Version;
use camino::Utf8PathBuf;
use std::io::Write;

/// Immutable configuration for one packaging run.
///
/// Constructed once at process start (from CLI flags or the CI
/// environment) and threaded through the pipeline as an ordinary
/// argument.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Source-control identity of the build.
    pub identity: BuildIdentity,
    /// Validated product/target/job metadata.
    pub metadata: BuildMetadata,
    /// Path to the compiled binary to package.
    pub binary_path: Utf8PathBuf,
    /// Path to the static asset tree.
    pub asset_dir: Utf8PathBuf,
    /// Distribution directory receiving the final archive.
    pub dist_dir: Utf8PathBuf,
    /// Suppress progress output (errors still shown).
    pub quiet: bool,
}

/// Resolve the version and archive name without touching the filesystem.
///
/// # Errors
///
/// Returns the same identity and metadata validation errors as a full run.
pub fn resolved_name(config: &PipelineConfig) -> Result<ArchiveName> {
    let version = Version::resolve(&config.identity)?;
    Ok(ArchiveName::new(version, config.metadata.clone()))
}

/// Run the full packaging pipeline and return the final archive path.
///
/// Stages run strictly in order: resolve version, compute the archive
/// name, stage binary and assets, serialize and publish atomically. The
/// first failure aborts the remainder of the run; no partial output is
/// ever left under the final archive name, and the staging directory is
/// removed on every exit path.
///
/// # Errors
///
/// Propagates the first stage failure; see [`crate::error::PackageError`]
/// for the taxonomy.
pub fn run(config: &PipelineConfig, stderr: &mut dyn Write) -> Result<Utf8PathBuf> {
    let archive_name = resolved_name(config)?;

    if !config.quiet {
        write_stderr_line(stderr, format!("Packaging {archive_name}..."));
    }

    let root = StagingRoot::assemble(
        &config.binary_path,
        &config.asset_dir,
        config.metadata.product_name(),
    )?;
    let final_path = write_archive(root, &config.dist_dir, &archive_name)?;

    if !config.quiet {
        write_stderr_line(stderr, success_message(&final_path));
    }

    Ok(final_path)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
