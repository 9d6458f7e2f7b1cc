use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Equipment catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EquipmentCommands {
    /// List all active equipment.
    List,
    /// Filter active equipment.
    Filter(FilterArgs),
    /// Get an active equipment record by ID.
    Get { id: String },
}

/// Criteria flags. Flags override the same field read from `--input`.
#[derive(Clone, Debug, Default, Args)]
pub struct FilterArgs {
    /// Equipment type (furnace, heat_pump, air_handler, mini_split)
    #[arg(long = "type")]
    pub equipment_type: Option<String>,
    /// Inclusive minimum tonnage
    #[arg(long)]
    pub min_tonnage: Option<f64>,
    /// Inclusive maximum tonnage
    #[arg(long)]
    pub max_tonnage: Option<f64>,
    /// Manufacturer code
    #[arg(long)]
    pub manufacturer: Option<String>,
    /// Filter criteria JSON file
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
