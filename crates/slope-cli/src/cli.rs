//! CLI definition using clap

use clap::{Parser, Subcommand};
use slope_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "slope-checker")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Slope stability lookup: factor of safety, displacement and failure-line diagrams")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Result dataset file (JSON or CSV). Uses config value if not specified.
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Diagram picture root. Uses config value if not specified.
    #[arg(long, global = true)]
    pub asset_root: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up the result for one selection
    Lookup {
        /// Zone (ABC, D, EF)
        #[arg(long, short = 'z')]
        zone: Option<String>,

        /// Excavation depth in metres (e.g. "5")
        #[arg(long, short = 'd')]
        depth: Option<String>,

        /// Embankment angle in degrees (e.g. "15" or "15°")
        #[arg(long, short = 'a')]
        angle: Option<String>,

        /// Water level (surface, none, rapid, or the Thai label)
        #[arg(long, short = 'w')]
        water_level: Option<String>,
    },

    /// Show the soil parameter table for a zone
    Params {
        /// Zone (ABC, D, EF)
        #[arg(long, short = 'z')]
        zone: String,
    },

    /// List selectable zones, water levels, and dataset depths/angles
    Options,

    /// Interactive session: set selectors one at a time
    Interactive,

    /// Build the diagram index from the picture tree
    IndexImages {
        /// Output JSON file
        #[arg(long, short = 'o', default_value = "images_output.json")]
        output: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set dataset path
        #[arg(long)]
        set_dataset: Option<PathBuf>,

        /// Set diagram picture root
        #[arg(long)]
        set_asset_root: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
