//! I/O helper utilities.
//!
//! Small adapters that enrich an io::Error with the operation, the path, and
//! a platform-aware hint, for use with map_err:
//!
//!   fs::rename(src, dest).map_err(io_error_with_help("move file", src))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

#[cfg(unix)]
fn os_code_hint(code: i32) -> Option<&'static str> {
    Some(match code {
        libc::EACCES | libc::EPERM => "permission denied; check ownership and write permissions",
        libc::EXDEV => "cross-filesystem; atomic rename not possible",
        libc::ENOENT => "path not found; verify it exists",
        libc::EEXIST => "already exists; pick a unique name or remove the target",
        libc::ENOTEMPTY => "directory not empty; entries appeared that the walk never saw",
        libc::ENOSPC => "insufficient space on device",
        libc::EROFS => "read-only filesystem; cannot write here",
        libc::ENAMETOOLONG => "filename or path too long; shorten path segments",
        _ => return None,
    })
}

#[cfg(not(unix))]
fn os_code_hint(code: i32) -> Option<&'static str> {
    // Common Win32 errors
    Some(match code {
        5 => "access denied; check permissions", // ERROR_ACCESS_DENIED
        17 => "not same device; cross-filesystem move", // ERROR_NOT_SAME_DEVICE
        32 => "sharing violation; file is in use", // ERROR_SHARING_VIOLATION
        2 | 3 => "path not found; verify it exists", // FILE/PATH NOT FOUND
        80 => "already exists; pick a unique name", // ERROR_FILE_EXISTS
        112 => "insufficient disk space",        // ERROR_DISK_FULL
        145 => "directory not empty; entries appeared that the walk never saw", // ERROR_DIR_NOT_EMPTY
        206 => "filename or path too long (MAX_PATH exceeded)", // ERROR_FILENAME_EXCED_RANGE
        _ => return None,
    })
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    Some(match kind {
        io::ErrorKind::PermissionDenied => {
            "permission denied; check ownership and write permissions"
        }
        io::ErrorKind::NotFound => "path not found; verify it exists",
        io::ErrorKind::AlreadyExists => "already exists; remove or choose a unique name",
        _ => return None,
    })
}

/// Format a human-friendly message with op/path plus a platform-aware hint.
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    if let Some(code) = e.raw_os_error() {
        if let Some(hint) = os_code_hint(code) {
            msg.push_str(&format!(" ({hint})"));
        }
        // Include OS code for diagnostics
        msg.push_str(&format!(" [os code: {}]", code));
    } else if let Some(hint) = kind_hint(e.kind()) {
        msg.push_str(&format!(" ({hint})"));
    }
    msg
}

/// Adapter for anyhow::Result code.
/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}
