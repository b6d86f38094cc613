//! Archive serialization and atomic publication.
//!
//! Serializes a staging root into a gzip-compressed tar archive written to
//! a temporary file inside the distribution directory, then published with
//! an atomic no-clobber rename. A partially written archive is never
//! visible under its final name, and the staging root is removed whether
//! serialization succeeds or fails.

use crate::error::{PackageError, Result};
use crate::naming::ArchiveName;
use crate::staging::StagingRoot;
use camino::{Utf8Path, Utf8PathBuf};
use flate2::Compression;
use flate2::write::GzEncoder;
use log::{debug, warn};
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;

/// Serialize `root` into `dest_dir` under `archive_name` and return the
/// final archive path.
///
/// Archive entries are relative to the staging root: extracting the result
/// reproduces the product binary and `ui/` directly, with no wrapping
/// directory. Top-level entries are appended in name order so the archive
/// layout is stable across runs with identical inputs.
///
/// The staging root is consumed; its directory is removed on every exit
/// path before this function returns.
///
/// # Errors
///
/// Returns [`PackageError::DestinationUnwritable`] if `dest_dir` cannot be
/// created or fails a writability probe,
/// [`PackageError::ArchiveNameCollision`] if the final path is already
/// occupied, and [`PackageError::Io`] for other serialization failures.
pub fn write_archive(
    root: StagingRoot,
    dest_dir: &Utf8Path,
    archive_name: &ArchiveName,
) -> Result<Utf8PathBuf> {
    prepare_destination(dest_dir)?;
    let final_path = dest_dir.join(archive_name.filename());

    let serialized = serialize_to_temp(&root, dest_dir);
    if let Err(err) = root.close() {
        // The archive temp file is independent of the staging root, so a
        // failed removal does not invalidate the run.
        warn!("failed to remove staging directory: {err}");
    }
    let temp = serialized?;

    publish(temp, &final_path)?;
    debug!("archive published at {final_path}");
    Ok(final_path)
}

/// Ensure the distribution directory exists and is writable.
fn prepare_destination(dest_dir: &Utf8Path) -> Result<()> {
    fs::create_dir_all(dest_dir).map_err(|e| PackageError::DestinationUnwritable {
        path: dest_dir.to_owned(),
        reason: e.to_string(),
    })?;

    // Verify writability by attempting to create a temp file
    let probe = dest_dir.join(".relpack-write-test");
    match fs::write(&probe, b"probe") {
        Ok(()) => {
            let _ = fs::remove_file(&probe);
            Ok(())
        }
        Err(e) => Err(PackageError::DestinationUnwritable {
            path: dest_dir.to_owned(),
            reason: e.to_string(),
        }),
    }
}

/// Write the gzip tar stream to a uniquely named temp file in `dest_dir`.
///
/// Keeping the temp file next to the final path guarantees the later
/// rename stays on one filesystem and therefore atomic.
fn serialize_to_temp(root: &StagingRoot, dest_dir: &Utf8Path) -> Result<NamedTempFile> {
    let temp = NamedTempFile::new_in(dest_dir).map_err(|e| PackageError::DestinationUnwritable {
        path: dest_dir.to_owned(),
        reason: e.to_string(),
    })?;

    let encoder = GzEncoder::new(temp, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for entry in sorted_entries(root.path())? {
        let name = entry.file_name();
        let path = entry.path();
        if fs::metadata(&path)?.is_dir() {
            builder.append_dir_all(&name, &path)?;
        } else {
            builder.append_path_with_name(&path, &name)?;
        }
    }

    // Explicitly finish both layers so the gzip trailer is complete.
    let encoder = builder.into_inner()?;
    let temp = encoder.finish()?;
    Ok(temp)
}

/// Top-level staging entries in name order.
fn sorted_entries(root: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(root)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(fs::DirEntry::file_name);
    Ok(entries)
}

/// Publish the temp file under its final name in one indivisible step.
fn publish(temp: NamedTempFile, final_path: &Utf8Path) -> Result<()> {
    temp.persist_noclobber(final_path).map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::AlreadyExists {
            PackageError::ArchiveNameCollision {
                path: final_path.to_owned(),
            }
        } else {
            PackageError::Io(e.error)
        }
    })?;
    Ok(())
}
