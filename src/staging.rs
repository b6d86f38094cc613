//! Artifact staging into an ephemeral packaging root.
//!
//! Copies the built binary and its asset tree into a uniquely named
//! temporary directory laid out exactly as the final archive contents:
//! the binary renamed to the product name, assets under `ui/`. The
//! directory is removed when the [`StagingRoot`] is dropped, so no
//! partial staging state survives an error path.

use crate::error::{PackageError, Result};
use camino::Utf8Path;
use log::debug;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Name of the subdirectory holding the asset tree inside the staging root.
const ASSET_SUBDIR: &str = "ui";

/// An ephemeral staging directory holding the exact archive contents.
///
/// Each call to [`StagingRoot::assemble`] creates a fresh uniquely named
/// directory, so concurrent packaging runs never collide on staging state.
#[derive(Debug)]
pub struct StagingRoot {
    dir: TempDir,
}

impl StagingRoot {
    /// Stage `binary` and `asset_dir` for archiving.
    ///
    /// The binary is copied to `<root>/<product_name>` with its permission
    /// bits intact. The asset tree is copied recursively to `<root>/ui`,
    /// preserving relative structure; symbolic links are followed and
    /// materialized, so the staged tree contains only regular files and
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns [`PackageError::SourceNotFound`] if `binary` or `asset_dir`
    /// does not exist, and [`PackageError::StagingFailure`] if the staging
    /// directory cannot be created or populated. On failure any partially
    /// created staging directory is removed before returning.
    pub fn assemble(binary: &Utf8Path, asset_dir: &Utf8Path, product_name: &str) -> Result<Self> {
        if !binary.is_file() {
            return Err(PackageError::SourceNotFound {
                path: binary.to_owned(),
            });
        }
        if !asset_dir.is_dir() {
            return Err(PackageError::SourceNotFound {
                path: asset_dir.to_owned(),
            });
        }

        let dir = tempfile::Builder::new()
            .prefix("relpack-stage-")
            .tempdir()
            .map_err(|e| PackageError::StagingFailure {
                reason: format!("failed to create staging directory: {e}"),
            })?;

        let staged_binary = dir.path().join(product_name);
        fs::copy(binary.as_std_path(), &staged_binary).map_err(|e| {
            PackageError::StagingFailure {
                reason: format!("failed to copy {binary} into staging: {e}"),
            }
        })?;

        let asset_dest = dir.path().join(ASSET_SUBDIR);
        copy_tree(asset_dir.as_std_path(), &asset_dest).map_err(|e| {
            PackageError::StagingFailure {
                reason: format!("failed to copy assets from {asset_dir}: {e}"),
            }
        })?;

        debug!(
            "staged {product_name} and {ASSET_SUBDIR}/ under {}",
            dir.path().display()
        );
        Ok(Self { dir })
    }

    /// Path to the staging root on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Remove the staging directory, surfacing any I/O failure.
    ///
    /// Dropping the value removes the directory best-effort; this variant
    /// reports removal errors instead of swallowing them.
    ///
    /// # Errors
    ///
    /// Returns [`PackageError::Io`] if the directory cannot be removed.
    pub fn close(self) -> Result<()> {
        self.dir.close().map_err(PackageError::Io)
    }
}

/// Recursively copy `src` into `dest`, following symbolic links.
///
/// `fs::metadata` resolves links, so a symlinked file or directory is
/// materialized as a regular copy; a dangling link surfaces as an error.
fn copy_tree(src: &Path, dest: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        let metadata = fs::metadata(entry.path())?;
        if metadata.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
