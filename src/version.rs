//! Version resolution from build identity.
//!
//! A tagged build is versioned by its tag; an untagged build falls back to
//! `<branch>-<short commit>` with the commit hash truncated to exactly
//! seven characters. Values that would be unsafe in a file name are
//! rejected outright, never mangled.

use crate::error::{PackageError, Result};
use crate::identity::BuildIdentity;
use std::fmt;

/// Number of commit-hash characters used in a fallback version.
const SHORT_COMMIT_LEN: usize = 7;

/// A resolved, filename-safe version string.
///
/// Derived only; there is no public constructor taking an arbitrary
/// string.
///
/// # Examples
///
/// ```
/// use relpack::identity::BuildIdentity;
/// use relpack::version::Version;
///
/// let tagged = Version::resolve(&BuildIdentity::from_tag("v1.2.0")).unwrap();
/// assert_eq!(tagged.as_str(), "v1.2.0");
///
/// let branch = BuildIdentity::from_branch("main", "abcdef1234567");
/// assert_eq!(Version::resolve(&branch).unwrap().as_str(), "main-abcdef1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    /// Resolve the canonical version for `identity`.
    ///
    /// A non-empty release tag wins outright, ignoring branch and commit.
    /// Otherwise the version is the branch name joined to the first seven
    /// characters of the commit hash. Resolution is deterministic: the same
    /// identity always yields the same version.
    ///
    /// # Errors
    ///
    /// Returns [`PackageError::InvalidIdentity`] when no tag is set and the
    /// branch or commit is missing, or the commit hash is shorter than
    /// seven characters. Returns [`PackageError::UnsafeVersionString`] when
    /// the derived value fails the filename-safety rule.
    pub fn resolve(identity: &BuildIdentity) -> Result<Self> {
        if let Some(tag) = identity.release_tag.as_deref()
            && !tag.is_empty()
        {
            return Self::validated(tag.to_owned());
        }

        let branch = identity.branch_name.as_deref().unwrap_or_default();
        if branch.is_empty() || identity.commit_hash.is_empty() {
            return Err(PackageError::InvalidIdentity {
                reason: "either a release tag or a branch name and commit hash is required"
                    .to_owned(),
            });
        }

        let commit_len = identity.commit_hash.chars().count();
        if commit_len < SHORT_COMMIT_LEN {
            return Err(PackageError::InvalidIdentity {
                reason: format!(
                    "commit hash must be at least {SHORT_COMMIT_LEN} characters, got {commit_len}"
                ),
            });
        }

        let short: String = identity
            .commit_hash
            .chars()
            .take(SHORT_COMMIT_LEN)
            .collect();
        Self::validated(format!("{branch}-{short}"))
    }

    /// Return the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validated(value: String) -> Result<Self> {
        if let Err(reason) = validate_filename_component(&value) {
            return Err(PackageError::UnsafeVersionString { value, reason });
        }
        Ok(Self(value))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate that `value` is safe to embed in an archive file name.
///
/// Rejects empty values, path separators, NUL, and any whitespace (which
/// also covers whitespace-only values).
pub(crate) fn validate_filename_component(value: &str) -> std::result::Result<(), String> {
    if value.is_empty() {
        return Err("must not be empty".to_owned());
    }
    if value.contains(['/', '\\']) {
        return Err("must not contain path separators".to_owned());
    }
    if value.contains('\0') {
        return Err("must not contain NUL".to_owned());
    }
    if let Some(bad) = value.chars().find(|c| c.is_whitespace()) {
        return Err(format!("must not contain whitespace ({bad:?})"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn tag_takes_precedence_over_branch_and_commit() {
        let identity = BuildIdentity {
            release_tag: Some("v2.0.1".to_owned()),
            branch_name: Some("main".to_owned()),
            commit_hash: "abcdef1234567".to_owned(),
        };
        let version = Version::resolve(&identity).expect("tagged identity resolves");
        assert_eq!(version.as_str(), "v2.0.1");
    }

    #[test]
    fn empty_tag_falls_back_to_branch_and_commit() {
        let identity = BuildIdentity {
            release_tag: Some(String::new()),
            branch_name: Some("main".to_owned()),
            commit_hash: "abcdef1234567".to_owned(),
        };
        let version = Version::resolve(&identity).expect("fallback resolves");
        assert_eq!(version.as_str(), "main-abcdef1");
    }

    #[test]
    fn commit_hash_is_truncated_to_exactly_seven_characters() {
        let identity = BuildIdentity::from_branch("develop", "0123456789abcdef0123456789abcdef01234567");
        let version = Version::resolve(&identity).expect("branch identity resolves");
        assert_eq!(version.as_str(), "develop-0123456");
    }

    #[test]
    fn resolution_is_deterministic() {
        let identity = BuildIdentity::from_branch("main", "abcdef1234567");
        let first = Version::resolve(&identity).expect("resolves");
        let second = Version::resolve(&identity).expect("resolves");
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_fully_empty_identity() {
        let identity = BuildIdentity {
            release_tag: None,
            branch_name: None,
            commit_hash: String::new(),
        };
        let err = Version::resolve(&identity).expect_err("empty identity must fail");
        assert!(matches!(err, PackageError::InvalidIdentity { .. }));
    }

    #[test]
    fn rejects_commit_hash_shorter_than_seven_characters() {
        let identity = BuildIdentity::from_branch("main", "abc123");
        let err = Version::resolve(&identity).expect_err("short commit must fail");
        assert!(matches!(err, PackageError::InvalidIdentity { .. }));
    }

    #[test]
    fn rejects_branch_missing_commit() {
        let identity = BuildIdentity {
            release_tag: None,
            branch_name: Some("main".to_owned()),
            commit_hash: String::new(),
        };
        let err = Version::resolve(&identity).expect_err("missing commit must fail");
        assert!(matches!(err, PackageError::InvalidIdentity { .. }));
    }

    #[rstest]
    #[case::slash_in_branch("feature/login")]
    #[case::backslash_in_branch("feature\\login")]
    #[case::space_in_branch("my branch")]
    #[case::whitespace_only(" ")]
    fn rejects_unsafe_branch_names(#[case] branch: &str) {
        let identity = BuildIdentity::from_branch(branch, "abcdef1234567");
        let err = Version::resolve(&identity).expect_err("unsafe branch must fail");
        assert!(matches!(err, PackageError::UnsafeVersionString { .. }));
    }

    #[rstest]
    #[case::slash_in_tag("release/v1")]
    #[case::whitespace_only_tag("   ")]
    fn rejects_unsafe_tags(#[case] tag: &str) {
        let identity = BuildIdentity::from_tag(tag);
        let err = Version::resolve(&identity).expect_err("unsafe tag must fail");
        assert!(matches!(err, PackageError::UnsafeVersionString { .. }));
    }

    #[test]
    fn display_shows_inner_value() {
        let version = Version::resolve(&BuildIdentity::from_tag("v1.2.0")).expect("resolves");
        assert_eq!(format!("{version}"), "v1.2.0");
    }
}
