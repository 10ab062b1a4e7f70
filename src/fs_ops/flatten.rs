//! Tree flattening: walk the source, move every file into the target, then
//! delete the emptied source subdirectories bottom-up.
//!
//! The walk is depth-first pre-order with lexical child ordering, so the
//! collision numbering is deterministic for a given tree. The taken-names set
//! is updated the moment a destination name is chosen; correctness depends on
//! finishing one file completely before resolving the next, which is why this
//! pass is strictly sequential.

use anyhow::{Context, Result};
use filetime::FileTime;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::Config;
use crate::errors::{FlattenError, RunError};
use crate::output as out;
use crate::platform::file_id;

use super::file_move::move_file;
use super::helpers::io_error_with_help;
use super::resolve::find_available_name;
use super::snapshot::list_dir;

/// Counters for one flattening run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Entries present in the target directory before any file was moved.
    pub initial_count: usize,
    /// Files moved, or in dry-run, files that would be moved.
    pub moved_count: usize,
}

/// Flatten `cfg.source_root` into `cfg.target_root`.
///
/// On failure the counters accumulated so far ride along in [`RunError`] so
/// callers can still report how far the run got. Already-moved files stay
/// moved; there is no rollback. Re-running is safe: files already directly in
/// the target are skipped and collisions re-resolve deterministically.
pub fn flatten_tree(cfg: &Config) -> Result<RunReport, RunError> {
    let mut report = RunReport::default();
    match walk_and_move(cfg, &mut report) {
        Ok(()) => Ok(report),
        Err(error) => Err(RunError { report, error }),
    }
}

fn walk_and_move(cfg: &Config, report: &mut RunReport) -> Result<()> {
    let source = cfg.source_root.as_path();
    let target = cfg.target_root.as_path();
    out::print_user(&format!(
        "Moving files from {} into {}...",
        source.display(),
        target.display()
    ));
    info!(source = %source.display(), target = %target.display(), apply = cfg.apply, "starting run");

    let mut taken = list_dir(target)?;
    report.initial_count = taken.len();

    // The root is recognized by filesystem identity, not by path comparison,
    // so a symlinked or bind-mounted source path cannot smuggle the root
    // itself into the deletion worklist.
    let root_id = file_id(source).map_err(io_error_with_help("stat source root", source))?;

    // Directories seen during the walk, in visitation order. Once every file
    // has moved out they are assumed empty and are deleted deepest-first.
    let mut visited_dirs: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.context("error while walking source tree")?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            let id = file_id(path).map_err(io_error_with_help("stat directory", path))?;
            if id != root_id {
                visited_dirs.push(path.to_path_buf());
            }
            continue;
        }

        // Everything that is not a directory is a move candidate, symlinks
        // included: the rename relocates the link itself.
        if path.parent() == Some(target) {
            out::print_user(&format!("SKIP IN PLACE {}", path.display()));
            debug!(path = %path.display(), "file already directly inside target");
            continue;
        }

        let original = entry.file_name().to_string_lossy().into_owned();
        let dest_name = find_available_name(&original, &taken);
        if dest_name != original {
            out::print_user(&format!("DUPLICATED {} to {}", path.display(), dest_name));
        } else {
            out::print_user(&format!("MOVE {} to {}", path.display(), dest_name));
        }

        if cfg.apply {
            // The timestamp is read at move time, not cached from the walk.
            let meta = entry
                .metadata()
                .with_context(|| format!("read metadata of {}", path.display()))?;
            let mtime = FileTime::from_last_modification_time(&meta);
            move_file(path, &target.join(&dest_name), mtime)?;
        }
        taken.insert(dest_name);
        report.moved_count += 1;
    }

    if cfg.apply {
        delete_emptied_dirs(&visited_dirs)?;
    }
    Ok(())
}

/// Remove the traversed directories in reverse visitation order so children
/// go before parents. Non-recursive on purpose: a directory that is somehow
/// not empty must fail loudly instead of taking its contents with it.
fn delete_emptied_dirs(dirs: &[PathBuf]) -> Result<()> {
    for dir in dirs.iter().rev() {
        fs::remove_dir(dir).map_err(|source| FlattenError::CleanupFailed {
            path: dir.clone(),
            source,
        })?;
        out::print_user(&format!("DELETE DIR {}", dir.display()));
        debug!(dir = %dir.display(), "deleted emptied directory");
    }
    Ok(())
}
