use std::fs;
use std::process::Command;

use assert_cmd::cargo;
use tempfile::tempdir;

/// --apply moves the files, deletes the emptied subdirectories, and prints
/// the applied summary.
#[test]
fn apply_moves_files_and_deletes_subdirs() {
    let td = tempdir().unwrap();
    let source = td.path().join("src");
    let target = td.path().join("dst");
    fs::create_dir_all(source.join("sub")).unwrap();
    fs::create_dir(&target).unwrap();
    fs::write(source.join("a.txt"), b"root").unwrap();
    fs::write(source.join("sub").join("a.txt"), b"nested").unwrap();

    let me = cargo::cargo_bin!("flatten_tree");
    let out = Command::new(me)
        .arg(&source)
        .arg(&target)
        .arg("--apply")
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("DELETE DIR"), "stdout: {stdout}");
    assert!(
        stdout.contains("2 files moved from source directory"),
        "stdout: {stdout}"
    );
    assert!(!stdout.contains("to be moved"), "stdout: {stdout}");

    assert_eq!(fs::read(target.join("a.txt")).unwrap(), b"root");
    assert_eq!(fs::read(target.join("a-1.txt")).unwrap(), b"nested");
    assert!(!source.join("sub").exists());
}

/// Single-argument form flattens in place; files already at the top level are
/// skipped, not renamed.
#[test]
fn single_argument_flattens_in_place() {
    let td = tempdir().unwrap();
    let root = td.path().join("root");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("top.txt"), b"top").unwrap();
    fs::write(root.join("sub").join("inner.txt"), b"inner").unwrap();

    let me = cargo::cargo_bin!("flatten_tree");
    let out = Command::new(me)
        .arg(&root)
        .arg("--apply")
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("SKIP IN PLACE"), "stdout: {stdout}");
    assert!(
        stdout.contains("1 files moved from source directory"),
        "stdout: {stdout}"
    );

    assert_eq!(fs::read(root.join("top.txt")).unwrap(), b"top");
    assert_eq!(fs::read(root.join("inner.txt")).unwrap(), b"inner");
    assert!(!root.join("sub").exists());
}

#[cfg(unix)]
mod cleanup_exit_code {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// A cleanup failure after successful moves still exits 1, but the moved
    /// files stay moved and the summary is printed first.
    #[test]
    fn partial_cleanup_failure_exits_nonzero() {
        // Skip if running as root; root bypasses permission checks.
        if unsafe { libc::geteuid() } == 0 {
            eprintln!("skipping: running as root");
            return;
        }

        let td = tempdir().unwrap();
        let source = td.path().join("src");
        let target = td.path().join("dst");
        fs::create_dir_all(source.join("sub")).unwrap();
        fs::create_dir(&target).unwrap();
        fs::write(source.join("sub").join("a.txt"), b"gone").unwrap();
        fs::set_permissions(&source, fs::Permissions::from_mode(0o555)).unwrap();

        let me = cargo::cargo_bin!("flatten_tree");
        let out = Command::new(me)
            .arg(&source)
            .arg(&target)
            .arg("--apply")
            .output()
            .expect("spawn binary");

        fs::set_permissions(&source, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(!out.status.success());
        let stdout = String::from_utf8_lossy(&out.stdout);
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(
            stdout.contains("1 files moved from source directory"),
            "stdout: {stdout}"
        );
        assert!(
            stderr.contains("error while deleting directory"),
            "stderr: {stderr}"
        );
        assert_eq!(fs::read(target.join("a.txt")).unwrap(), b"gone");
        assert!(source.join("sub").exists());
    }
}
