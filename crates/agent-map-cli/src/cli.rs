//! CLI argument definitions for agent-map.

use std::path::PathBuf;

use agent_map_core::StoreBackend;
use agent_map_core::config::DEFAULT_CONFIG_FILE;
use agent_map_core::export::ExportFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agent-map")]
#[command(about = "Agent profiling map: rank segments per level and track totals", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Record store path (overrides the config file)
    #[arg(long, env = "AGENT_MAP_STORE")]
    pub store: Option<PathBuf>,

    /// Record store backend: json or sqlite (overrides the config file)
    #[arg(long)]
    pub backend: Option<StoreBackend>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List saved associates
    List,
    /// Show an associate's grid and totals
    Show {
        /// Associate name
        name: String,
        /// Output the full mapping as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set one cell (level and segment by name or 1-based index)
    Set {
        /// Associate name
        name: String,
        /// Level, e.g. "interest" or 1
        level: String,
        /// Segment, e.g. "private-resale" or 2
        segment: String,
        /// Rank 1-8; anything else clears the cell
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Set all eight cells of a level in segment order ("-" leaves a cell empty)
    Row {
        /// Associate name
        name: String,
        /// Level, e.g. "knowledge" or 2
        level: String,
        /// Eight ranks in segment order
        #[arg(num_args = 8, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Edit an associate's contact details
    Profile {
        /// Associate name
        name: String,
        /// Display name
        #[arg(long)]
        display_name: Option<String>,
        #[arg(long)]
        mobile: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        manager: Option<String>,
    },
    /// Export an associate's mapping
    Export {
        /// Associate name
        name: String,
        /// Output format: json, csv, svg or report
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
        /// Output file path (default: <export dir>/<name>_<suffix>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fill in the map interactively
    Form {
        /// Associate name
        name: String,
    },
    /// Describe the levels and how to fill in the map
    Levels,
}
