use anyhow::Context;
use hvac_core::enums::EquipmentType;
use hvac_core::filter::EquipmentFilterCriteria;
use hvac_db::error::DatabaseError;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{EquipmentCommands, FilterArgs};
use crate::commands::shared::{parse_enum, read_json};
use crate::context::AppContext;
use crate::output::output;

/// Handle `hvac equipment`.
pub async fn handle(
    action: &EquipmentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EquipmentCommands::List => {
            let equipment = ctx.service.list_equipment().await?;
            output(&equipment, flags.format)
        }
        EquipmentCommands::Filter(args) => {
            let criteria = criteria_from_args(args)?;
            criteria.validate().context("invalid filter criteria")?;
            let equipment = ctx.service.filter_equipment(&criteria).await?;
            output(&equipment, flags.format)
        }
        EquipmentCommands::Get { id } => match ctx.service.get_equipment(id).await {
            Ok(equipment) => output(&equipment, flags.format),
            Err(DatabaseError::NoResult) => anyhow::bail!("equipment '{id}' not found"),
            Err(error) => Err(error.into()),
        },
    }
}

/// Start from the `--input` document, if any, then let each flag replace
/// its field.
fn criteria_from_args(args: &FilterArgs) -> anyhow::Result<EquipmentFilterCriteria> {
    let mut criteria = match args.input.as_deref() {
        Some(path) => read_json(Some(path), "filter criteria")?,
        None => EquipmentFilterCriteria::default(),
    };

    if let Some(raw) = args.equipment_type.as_deref() {
        criteria.equipment_type = Some(parse_enum::<EquipmentType>(raw, "type")?);
    }
    if args.min_tonnage.is_some() {
        criteria.min_tonnage = args.min_tonnage;
    }
    if args.max_tonnage.is_some() {
        criteria.max_tonnage = args.max_tonnage;
    }
    if let Some(code) = &args.manufacturer {
        criteria.manufacturer = Some(code.clone());
    }
    Ok(criteria)
}
