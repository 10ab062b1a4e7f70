//! Filesystem operations: the flattening core.

mod file_move;
mod flatten;
mod helpers;
mod resolve;
mod snapshot;

pub use flatten::{RunReport, flatten_tree};
pub use resolve::{find_available_name, inject_int};
pub use snapshot::list_dir;
