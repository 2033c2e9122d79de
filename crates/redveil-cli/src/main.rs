use clap::Parser;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub(crate) type CliResult<T> = Result<T, redveil_core::Error>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Embed(args) => args.run(),
        Commands::Extract(args) => args.run(),
    }
}
