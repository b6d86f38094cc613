//! Source-control identity of the build being packaged.
//!
//! The identity triple is supplied once by the surrounding CI environment
//! (tag, branch, commit) and never mutated; version resolution in
//! [`crate::version`] consumes it read-only.

/// The source-control identity of a single pipeline run.
///
/// At least a non-empty release tag, or a branch name together with a
/// commit hash, must be present; [`crate::version::Version::resolve`]
/// enforces the invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildIdentity {
    /// Explicit release tag, if this build was triggered by one.
    pub release_tag: Option<String>,
    /// Branch the built commit belongs to.
    pub branch_name: Option<String>,
    /// Commit hash of the built revision; may be empty for tagged builds.
    pub commit_hash: String,
}

impl BuildIdentity {
    /// Identity for a tagged release build.
    #[must_use]
    pub fn from_tag(tag: impl Into<String>) -> Self {
        Self {
            release_tag: Some(tag.into()),
            branch_name: None,
            commit_hash: String::new(),
        }
    }

    /// Identity for an untagged branch build.
    #[must_use]
    pub fn from_branch(branch: impl Into<String>, commit: impl Into<String>) -> Self {
        Self {
            release_tag: None,
            branch_name: Some(branch.into()),
            commit_hash: commit.into(),
        }
    }
}
