//! Release packaging pipeline library.
//!
//! This crate turns a freshly built binary and its static asset directory
//! into a uniquely named, reproducible `.tar.gz` release archive. It is used
//! by the `relpack` CLI binary and can be consumed programmatically by CI
//! tooling that wants to drive packaging runs directly.
//!
//! # Modules
//!
//! - [`archive`] - Archive serialization and atomic publication
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Semantic error types identifying the failing stage
//! - [`identity`] - Source-control identity of the build
//! - [`metadata`] - Validated product/target/job metadata
//! - [`naming`] - Deterministic archive naming policy
//! - [`output`] - Progress and success message formatting
//! - [`pipeline`] - Packaging pipeline orchestration
//! - [`staging`] - Artifact staging into an ephemeral packaging root
//! - [`version`] - Version resolution from build identity

pub mod archive;
pub mod cli;
pub mod error;
pub mod identity;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod staging;
pub mod version;
