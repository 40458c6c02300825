use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "geofencer",
    version,
    about = "Watches a set of circular geofences around the current position"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the current position once and update the cached viewport
    Locate,
    /// Monitor the configured geofences until interrupted
    Watch,
    /// List the configured geofence regions
    Regions,
}
