//! Target directory snapshot.
//! Enumerates the entry names of the target directory once, up front,
//! producing the initial taken-names set.

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use super::helpers::io_error_with_help;
use crate::errors::FlattenError;

/// Names of every file and directory directly inside `path`.
///
/// Both kinds occupy the flat namespace of the target, so both count as
/// taken. The listing is drained to completion; an error partway through
/// aborts with no partial set returned.
pub fn list_dir(path: &Path) -> Result<HashSet<String>> {
    let entries = fs::read_dir(path).map_err(|e| classify_open_error(path, e))?;
    let mut names = HashSet::new();
    for entry in entries {
        let entry = entry.map_err(io_error_with_help("read entry of directory", path))?;
        names.insert(entry.file_name().to_string_lossy().into_owned());
    }
    debug!(dir = %path.display(), count = names.len(), "listed target directory");
    Ok(names)
}

fn classify_open_error(path: &Path, e: io::Error) -> anyhow::Error {
    match e.kind() {
        io::ErrorKind::NotFound => FlattenError::TargetNotFound(path.to_path_buf()).into(),
        io::ErrorKind::PermissionDenied => FlattenError::PermissionDenied {
            path: path.to_path_buf(),
            context: e.to_string(),
        }
        .into(),
        _ => io_error_with_help("open directory", path)(e),
    }
}
