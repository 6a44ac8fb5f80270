use clap::{Parser, Subcommand};
use pixveil_core::Scheme;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Encoding scheme: lsb1 (alias lsb), lsb2 (alias lsb-first-two) or spread5 (alias f5).
    /// Has to be the same for hide and unveil
    #[arg(short, long, global = true, default_value = "lsb1")]
    pub scheme: Scheme,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}
