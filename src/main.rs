//! CLI entry point for maze generation, solving and scripted traversal

use clap::Parser;
use mazeweave::io::cli::{Cli, MazeRunner};

fn main() -> mazeweave::Result<()> {
    let cli = Cli::parse();
    let mut runner = MazeRunner::new(cli);
    runner.run().map(|_| ())
}
