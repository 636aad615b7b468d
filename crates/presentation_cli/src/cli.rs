//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Nearby restaurant finder
#[derive(Debug, Parser)]
#[command(name = "nearby-cli")]
#[command(author, version, about = "Find restaurants around a location", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "NEARBY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch restaurants around a location and filter them by name
    Search(SearchArgs),

    /// Print the Overpass query that a search would send
    Query {
        /// Latitude of the search center
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude of the search center
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Search radius in miles
        #[arg(short, long)]
        radius: Option<f64>,
    },

    /// Check whether the Overpass endpoint responds
    Status,
}

/// Arguments of the `search` command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Latitude; without it the configured location is used
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude; without it the configured location is used
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Search radius in miles, snapped to the 0.5 mile grid between 0.5 and 5
    #[arg(short, long)]
    pub radius: Option<f64>,

    /// Search text matched against restaurant names
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Maximum number of suggestions
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Pick the n-th suggestion (1-based) and focus on it
    #[arg(short, long)]
    pub pick: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Map `-v` repetitions to a filter directive
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
