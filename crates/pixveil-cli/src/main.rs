use clap::Parser;
use pixveil_core::PixveilError;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = std::result::Result<T, PixveilError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let scheme = args.scheme;

    match args.command {
        Commands::Hide(hide) => hide.run(scheme),
        Commands::Unveil(unveil) => unveil.run(scheme),
        Commands::Capacity(capacity) => capacity.run(scheme),
    }
}
