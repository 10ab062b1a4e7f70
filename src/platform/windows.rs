//! Windows implementations of platform helpers.
//!
//! Notes:
//! - File identity uses the volume serial number plus the 64-bit file index
//!   from `GetFileInformationByHandle`, the NT equivalent of device+inode.
//! - Directories can only be opened with FILE_FLAG_BACKUP_SEMANTICS.

use std::fs::{File, OpenOptions};
use std::io;
use std::mem;
use std::os::windows::fs::OpenOptionsExt;
use std::os::windows::io::AsRawHandle;
use std::path::Path;

use windows_sys::Win32::Storage::FileSystem::{
    BY_HANDLE_FILE_INFORMATION, FILE_FLAG_BACKUP_SEMANTICS, GetFileInformationByHandle,
};

/// Stable identity of a filesystem object: volume serial + file index.
///
/// Two paths compare equal here exactly when they name the same object, which
/// stays correct through symlinks and junctions where path comparison lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileId {
    volume: u32,
    index: u64,
}

/// Identity of the object at `path`, following symlinks.
pub fn file_id(path: &Path) -> io::Result<FileId> {
    // access_mode(0): metadata queries need no read/write access.
    let handle = OpenOptions::new()
        .access_mode(0)
        .custom_flags(FILE_FLAG_BACKUP_SEMANTICS)
        .open(path)?;

    let mut info: BY_HANDLE_FILE_INFORMATION = unsafe { mem::zeroed() };
    let ok = unsafe { GetFileInformationByHandle(handle.as_raw_handle() as _, &mut info) };
    if ok == 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(FileId {
        volume: info.dwVolumeSerialNumber,
        index: (u64::from(info.nFileIndexHigh) << 32) | u64::from(info.nFileIndexLow),
    })
}

/// Open log file for appending (best-effort; no symlink defense available via
/// std on Windows beyond the caller's ancestor check).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn same_directory_has_same_id() {
        let td = tempdir().unwrap();
        let a = file_id(td.path()).unwrap();
        let b = file_id(td.path()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_directories_have_distinct_ids() {
        let td = tempdir().unwrap();
        let sub = td.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        assert_ne!(file_id(td.path()).unwrap(), file_id(&sub).unwrap());
    }
}
