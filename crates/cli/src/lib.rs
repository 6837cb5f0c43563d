//! Command line front end for the status registry

use clap::Parser;

pub mod commands;
pub mod config;
pub mod logging;

pub use commands::Commands;
pub use config::{Config, GlobalArgs, OutputFormat};

#[derive(Parser)]
#[command(name = "presence")]
#[command(about = "Look up and classify HTTP status codes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}
