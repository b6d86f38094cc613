//! Validated build metadata supplied by the CI environment.
//!
//! The product/target/job triple is validated once at construction and
//! treated as immutable for the rest of the run; every field feeds
//! directly into the archive file name.

use crate::error::{PackageError, Result};
use crate::version::validate_filename_component;

/// The validated (product, target platform, job) triple for one run.
///
/// # Examples
///
/// ```
/// use relpack::metadata::BuildMetadata;
///
/// let meta = BuildMetadata::new("svc", "linux-arm64", "aarch64").unwrap();
/// assert_eq!(meta.product_name(), "svc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    product_name: String,
    target_platform: String,
    job_name: String,
}

impl BuildMetadata {
    /// Validate and construct build metadata.
    ///
    /// # Errors
    ///
    /// Returns [`PackageError::InvalidMetadata`] naming the offending field
    /// when any value is empty or unsafe for use in a file name.
    pub fn new(
        product_name: impl Into<String>,
        target_platform: impl Into<String>,
        job_name: impl Into<String>,
    ) -> Result<Self> {
        let product_name = product_name.into();
        let target_platform = target_platform.into();
        let job_name = job_name.into();

        validate_field("product name", &product_name)?;
        validate_field("target platform", &target_platform)?;
        validate_field("job name", &job_name)?;

        Ok(Self {
            product_name,
            target_platform,
            job_name,
        })
    }

    /// Product name; also the name the binary takes inside the archive.
    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Target platform identifier the binary was built for.
    #[must_use]
    pub fn target_platform(&self) -> &str {
        &self.target_platform
    }

    /// CI job identifier distinguishing builds of the same target.
    #[must_use]
    pub fn job_name(&self) -> &str {
        &self.job_name
    }
}

fn validate_field(field: &'static str, value: &str) -> Result<()> {
    validate_filename_component(value)
        .map_err(|reason| PackageError::InvalidMetadata { field, reason })
}
