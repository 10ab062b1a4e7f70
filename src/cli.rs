//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - TARGET_DIR is optional; when omitted, files are flattened into
//!   SOURCE_DIR itself.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{Config, LogLevel};

/// CLI wrapper for the flatten_tree library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Move all files of a directory tree into a single flat directory",
    long_about = "Moves every file found under SOURCE_DIR, at any depth, into TARGET_DIR.\n\
        If no target directory is given, the files of the subdirectories are moved\n\
        up into SOURCE_DIR itself.\n\n\
        Collisions on file names are handled by adding a numeric count to the\n\
        filenames: '...-1.jpg', '...-2.jpg', ...\n\n\
        Subdirectories of the source are deleted after all files have been moved.\n\n\
        By default, the command only shows what will be performed and doesn't move\n\
        files or delete directories. Use the --apply flag to actually perform the\n\
        moves."
)]
pub struct Args {
    /// Directory whose tree will be flattened.
    #[arg(value_name = "SOURCE_DIR", value_hint = ValueHint::DirPath)]
    pub source_dir: PathBuf,

    /// Directory receiving the files; defaults to SOURCE_DIR itself.
    #[arg(value_name = "TARGET_DIR", value_hint = ValueHint::DirPath)]
    pub target_dir: Option<PathBuf>,

    /// Do move files and delete directories instead of only showing what will be done.
    #[arg(long)]
    pub apply: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Append logs to this file in addition to stdout.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > Normal.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or_default()
    }

    /// Build the runtime Config for this invocation.
    pub fn to_config(&self) -> Config {
        let mut cfg = Config::new(self.source_dir.clone(), self.target_dir.clone());
        cfg.apply = self.apply;
        cfg.log_level = self.effective_log_level();
        cfg.log_file = self.log_file.clone();
        cfg
    }
}

pub fn parse() -> Args {
    Args::parse()
}
