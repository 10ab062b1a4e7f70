//! Small path helpers shared by logging and validation.

use std::fs;
use std::io;
use std::path::Path;

/// Report whether any ancestor of `path` (not `path` itself) is a symlink.
/// Missing ancestors are ignored; the caller may be about to create them.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    for ancestor in path.ancestors().skip(1) {
        match fs::symlink_metadata(ancestor) {
            Ok(meta) if meta.file_type().is_symlink() => return Ok(true),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
    }
    Ok(false)
}
