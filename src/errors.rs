//! Typed error definitions for flatten_tree.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::RunReport;

#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("target directory not found: {0}")]
    TargetNotFound(PathBuf),

    #[error("permission denied on {path}: {context}")]
    PermissionDenied { path: PathBuf, context: String },

    #[error("error while deleting directory {path}: {source}")]
    CleanupFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A failed run that still carries the counters accumulated before the abort.
///
/// The CLI prints the counters regardless of outcome, so the error keeps the
/// partial [`RunReport`] alongside the cause.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct RunError {
    pub report: RunReport,
    pub error: anyhow::Error,
}

impl RunError {
    /// The well-known failure mode, if the cause is one.
    pub fn kind(&self) -> Option<&FlattenError> {
        self.error.downcast_ref::<FlattenError>()
    }
}
