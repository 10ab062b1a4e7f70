//! Config validation logic.
//! Verifies both roots exist and are directories, canonicalizes them, and
//! rejects a target nested inside the source.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::types::Config;

/// Validate the configured roots and rewrite them to canonical absolute paths.
///
/// - Both roots must exist and be directories.
/// - The target must not be a strict subdirectory of the source; the source
///   itself as target is explicitly allowed (flatten in place).
///
/// Canonicalization happens before the prefix check so the comparison holds
/// under symlinks and relative invocations.
pub fn validate_and_normalize(cfg: &mut Config) -> Result<()> {
    cfg.source_root = canonical_dir(&cfg.source_root)?;
    cfg.target_root = canonical_dir(&cfg.target_root)?;

    if cfg.target_root != cfg.source_root && cfg.target_root.starts_with(&cfg.source_root) {
        bail!("target folder is inside the source folder");
    }

    info!(
        source = %cfg.source_root.display(),
        target = %cfg.target_root.display(),
        apply = cfg.apply,
        "config validated"
    );
    Ok(())
}

/// Ensure `path` names an existing directory and return its canonical form.
fn canonical_dir(path: &Path) -> Result<PathBuf> {
    let meta = fs::metadata(path)
        .with_context(|| format!("cannot access path: {}", path.display()))?;
    if !meta.is_dir() {
        bail!("path is not a directory: {}", path.display());
    }
    let real = dunce::canonicalize(path)
        .with_context(|| format!("cannot resolve path: {}", path.display()))?;
    debug!(given = %path.display(), real = %real.display(), "canonicalized directory");
    Ok(real)
}
