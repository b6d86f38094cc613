//! Archive naming policy for release bundles.
//!
//! Constructs deterministic archive names in the format
//! `<product>-<version>-<target>-<job>.tar.gz`. The name is fully
//! determined by the resolved version and validated metadata; no other
//! inputs affect it.

use crate::metadata::BuildMetadata;
use crate::version::Version;
use std::fmt;

/// The fixed file extension for release archives.
const ARCHIVE_EXTENSION: &str = ".tar.gz";

/// A fully-qualified release archive name.
///
/// # Examples
///
/// ```
/// use relpack::identity::BuildIdentity;
/// use relpack::metadata::BuildMetadata;
/// use relpack::naming::ArchiveName;
/// use relpack::version::Version;
///
/// let version = Version::resolve(&BuildIdentity::from_tag("v1.2.0")).unwrap();
/// let meta = BuildMetadata::new("svc", "linux-arm64", "aarch64").unwrap();
///
/// let name = ArchiveName::new(version, meta);
/// assert_eq!(name.to_string(), "svc-v1.2.0-linux-arm64-aarch64.tar.gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    version: Version,
    metadata: BuildMetadata,
}

impl ArchiveName {
    /// Create an archive name from a resolved version and validated
    /// metadata. Pure; no side effects.
    #[must_use]
    pub fn new(version: Version, metadata: BuildMetadata) -> Self {
        Self { version, metadata }
    }

    /// Return the version component.
    #[must_use]
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Return the metadata component.
    #[must_use]
    pub fn metadata(&self) -> &BuildMetadata {
        &self.metadata
    }

    /// Return the filename as a string without consuming the value.
    #[must_use]
    pub fn filename(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ArchiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}{}",
            self.metadata.product_name(),
            self.version,
            self.metadata.target_platform(),
            self.metadata.job_name(),
            ARCHIVE_EXTENSION
        )
    }
}
