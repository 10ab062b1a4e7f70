//! Application orchestrator.
//! Merges CLI args into a Config, initializes logging, installs the signal
//! handler, validates paths, runs the flattener, and reports the outcome.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

use crate::cli::Args;
use crate::config::{Config, validate_and_normalize};
use crate::errors::FlattenError;
use crate::fs_ops::flatten_tree;
use crate::logging::init_tracing;
use crate::output as out;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let mut cfg = args.to_config();

    // Initialize logging and capture the guard so buffered lines flush on exit
    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json)
        .map_err(|e| {
            out::print_error(&format!("Failed to initialize logging: {}", e));
            e
        })?;

    // Flush file logs if the user interrupts mid-run, then terminate. There is
    // no cooperative cancellation: a run either completes or the process ends.
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            out::print_warn("Received interrupt; flushing logs and exiting.");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take(); // drop guard here to flush tracing_appender
            }
            std::process::exit(130);
        })
        .expect("failed to install signal handler");
    }

    debug!("Starting flatten_tree: {:?}", args);

    let result = run_flatten(&mut cfg);

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }
    result
}

fn run_flatten(cfg: &mut Config) -> Result<()> {
    validate_and_normalize(cfg)?;

    let (report, failure) = match flatten_tree(cfg) {
        Ok(report) => (report, None),
        Err(e) => (e.report, Some(e.error)),
    };

    // Counters are printed even when the run aborted partway, so the operator
    // can see how far it got before the error.
    out::print_user(&format!(
        "{} files and directories initially in target folder",
        report.initial_count
    ));
    if cfg.apply {
        out::print_user(&format!(
            "{} files moved from source directory",
            report.moved_count
        ));
    } else {
        out::print_user(&format!(
            "{} files to be moved from source directory",
            report.moved_count
        ));
        out::print_user("No file was moved (no --apply flag)");
    }

    let Some(err) = failure else { return Ok(()) };

    match err.downcast_ref::<FlattenError>() {
        Some(FlattenError::TargetNotFound(path)) => {
            error!(kind = "target_not_found", path = %path.display(), "flatten failed");
        }
        Some(FlattenError::PermissionDenied { path, context }) => {
            error!(kind = "permission_denied", path = %path.display(), %context, "flatten failed");
        }
        Some(FlattenError::CleanupFailed { path, .. }) => {
            error!(kind = "cleanup_failed", path = %path.display(), "directory cleanup failed");
            out::print_warn(
                "Your files were moved, but deleting the emptied source directories \
                 failed partway; fix the reported directory and re-run.",
            );
        }
        None => {
            error!(error = ?err, "flatten failed");
        }
    }
    out::print_error(&format!("{err:#}"));
    Err(err)
}
