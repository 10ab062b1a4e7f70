//! File move primitive.
//! Atomic rename into the target directory, then restore the modification
//! timestamp on the destination. A timestamp failure fails the move.

use anyhow::Result;
use filetime::{FileTime, set_file_mtime};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::helpers::io_error_with_help;

/// Rename `src` to `dest` and stamp `dest` with `mtime`.
///
/// Cross-filesystem moves are out of scope: when the rename fails with EXDEV
/// the error surfaces as-is, there is no copy fallback.
pub(super) fn move_file(src: &Path, dest: &Path, mtime: FileTime) -> Result<()> {
    fs::rename(src, dest).map_err(io_error_with_help("move file", src))?;
    set_file_mtime(dest, mtime).map_err(io_error_with_help("set modification time on", dest))?;
    debug!(src = %src.display(), dest = %dest.display(), "renamed file atomically");
    Ok(())
}
