use std::fs;
use std::path::Path;

use flatten_tree::{Config, flatten_tree};
use tempfile::tempdir;

fn dry_cfg(source: &Path, target: &Path) -> Config {
    Config::new(source.to_path_buf(), Some(target.to_path_buf()))
}

/// Dry-run reports the same counters an apply run would, and touches nothing.
#[test]
fn dry_run_never_mutates_the_filesystem() {
    let td = tempdir().unwrap();
    let source = td.path().join("src");
    let target = td.path().join("dst");
    fs::create_dir_all(source.join("sub")).unwrap();
    fs::create_dir(&target).unwrap();
    fs::write(source.join("a.txt"), b"root a").unwrap();
    fs::write(source.join("sub").join("a.txt"), b"sub a").unwrap();
    fs::write(source.join("sub").join("b.txt"), b"sub b").unwrap();
    fs::write(target.join("keep.txt"), b"keep").unwrap();

    let report = flatten_tree(&dry_cfg(&source, &target)).unwrap();

    assert_eq!(report.initial_count, 1);
    assert_eq!(report.moved_count, 3);

    // Every file still at its original path, byte-identical.
    assert_eq!(fs::read(source.join("a.txt")).unwrap(), b"root a");
    assert_eq!(fs::read(source.join("sub").join("a.txt")).unwrap(), b"sub a");
    assert_eq!(fs::read(source.join("sub").join("b.txt")).unwrap(), b"sub b");
    assert!(source.join("sub").is_dir());

    // Target gained nothing.
    let entries: Vec<_> = fs::read_dir(&target)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("keep.txt")]);
}

/// The counters a dry-run predicts match what a subsequent apply run does.
#[test]
fn dry_run_predicts_apply_counters() {
    let td = tempdir().unwrap();
    let source = td.path().join("src");
    let target = td.path().join("dst");
    fs::create_dir_all(source.join("x")).unwrap();
    fs::create_dir_all(source.join("y")).unwrap();
    fs::create_dir(&target).unwrap();
    fs::write(source.join("x").join("f.bin"), b"1").unwrap();
    fs::write(source.join("y").join("f.bin"), b"2").unwrap();

    let predicted = flatten_tree(&dry_cfg(&source, &target)).unwrap();

    let mut cfg = dry_cfg(&source, &target);
    cfg.apply = true;
    let applied = flatten_tree(&cfg).unwrap();

    assert_eq!(predicted, applied);
}
