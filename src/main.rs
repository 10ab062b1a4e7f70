use anyhow::Result;

use flatten_tree::{app, cli};

fn main() -> Result<()> {
    let args = cli::parse();
    app::run(args)
}
