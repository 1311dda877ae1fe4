//! rx CLI - emit s-expressions from serialized relational algebra trees

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod render;

use cli::Cli;
use commands::{emit, kinds};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Emit(args) => emit::execute(args, &cli.global),
        cli::Commands::Kinds(args) => kinds::execute(args, &cli.global),
    }
}
