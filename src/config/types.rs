//! Core configuration types.
//! - Config holds the per-run settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for one flattening run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the tree whose files are collected
    pub source_root: PathBuf,
    /// Flat directory receiving every file; may equal `source_root`
    pub target_root: PathBuf,
    /// If false, report what would be done but do not touch the filesystem
    pub apply: bool,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Construct a Config for the given roots. A missing target means
    /// "flatten into the source directory itself".
    pub fn new(source_root: impl Into<PathBuf>, target_root: Option<PathBuf>) -> Self {
        let source_root = source_root.into();
        let target_root = target_root.unwrap_or_else(|| source_root.clone());
        Self {
            source_root,
            target_root,
            apply: false,
            log_level: LogLevel::Normal,
            log_file: None,
        }
    }
}
