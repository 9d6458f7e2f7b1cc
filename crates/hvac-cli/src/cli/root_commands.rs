use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::EquipmentCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Estimate cooling and heating load from screening answers.
    Calculate(CalculateArgs),
    /// Print the screening questionnaire.
    Screening,
    /// Equipment catalog.
    Equipment {
        #[command(subcommand)]
        action: EquipmentCommands,
    },
    /// List manufacturers.
    Manufacturers,
    /// Print the JSON Schema of a data type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CalculateArgs {
    /// Screening answers JSON file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: SchemaType,
}

/// Data types with a published JSON Schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Answers,
    Result,
    Criteria,
    Equipment,
}
