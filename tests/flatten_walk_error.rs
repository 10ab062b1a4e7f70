#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use flatten_tree::{Config, flatten_tree};
use tempfile::tempdir;

fn apply_cfg(source: &Path, target: &Path) -> Config {
    let mut cfg = Config::new(source.to_path_buf(), Some(target.to_path_buf()));
    cfg.apply = true;
    cfg
}

/// An unreadable subdirectory aborts the walk at the failure point: files
/// moved before it stay moved, nothing after it is processed, and the
/// deletion phase never runs.
#[test]
fn unreadable_subdir_aborts_walk_and_skips_cleanup() {
    // Skip if running as root; root bypasses permission checks and the walk
    // would succeed.
    if unsafe { libc::geteuid() } == 0 {
        eprintln!("skipping: running as root");
        return;
    }

    let td = tempdir().unwrap();
    let source = td.path().join("src");
    let target = td.path().join("dst");
    fs::create_dir_all(source.join("aaa")).unwrap();
    fs::create_dir_all(source.join("bbb_locked")).unwrap();
    fs::create_dir(&target).unwrap();
    fs::write(source.join("aaa").join("ok.txt"), b"made it").unwrap();
    fs::set_permissions(
        source.join("bbb_locked"),
        fs::Permissions::from_mode(0o000),
    )
    .unwrap();

    let err = flatten_tree(&apply_cfg(&source, &target)).unwrap_err();

    fs::set_permissions(
        source.join("bbb_locked"),
        fs::Permissions::from_mode(0o755),
    )
    .unwrap();

    // The earlier move committed; the run error reports the partial count.
    assert_eq!(err.report.moved_count, 1);
    assert_eq!(fs::read(target.join("ok.txt")).unwrap(), b"made it");
    assert!(format!("{err:#}").contains("error while walking source tree"));

    // Cleanup was skipped entirely: even the already-emptied dir survives.
    assert!(source.join("aaa").exists());
    assert!(source.join("bbb_locked").exists());
}
