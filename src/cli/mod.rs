// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output (for scripting/API use)
    #[arg(long)]
    pub json: bool,

    /// Command to execute; no command opens the interactive menu
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
