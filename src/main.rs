//! CLI entry point for the wish map assembler

use clap::Parser;
use wishmap::io::cli::{Cli, WishMapRunner};

fn main() -> wishmap::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let runner = WishMapRunner::new(cli);
    runner.run()
}
