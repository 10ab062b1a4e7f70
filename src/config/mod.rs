//! Runtime configuration.
//!
//! The apply/dry-run switch and both directory roots are explicit fields on
//! `Config` so the core stays independently testable without a command-line
//! layer. Validation canonicalizes the roots before the core ever sees them.

pub mod types;
pub mod validate;

pub use types::{Config, LogLevel};
pub use validate::validate_and_normalize;
