use hvac_core::entities::Equipment;
use hvac_core::filter::EquipmentFilterCriteria;
use hvac_core::screening::{LoadCalculationResult, ScreeningAnswers};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `hvac schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for_type(args.type_name), flags.format)
}

fn schema_for_type(type_name: SchemaType) -> schemars::Schema {
    match type_name {
        SchemaType::Answers => schema_for!(ScreeningAnswers),
        SchemaType::Result => schema_for!(LoadCalculationResult),
        SchemaType::Criteria => schema_for!(EquipmentFilterCriteria),
        SchemaType::Equipment => schema_for!(Equipment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemas_describe_camel_case_properties() {
        let cases = [
            (SchemaType::Answers, "squareFootage"),
            (SchemaType::Result, "priceRangeHigh"),
            (SchemaType::Criteria, "minTonnage"),
            (SchemaType::Equipment, "modelNumber"),
        ];
        for (type_name, property) in cases {
            let schema = serde_json::to_value(schema_for_type(type_name)).unwrap();
            assert!(
                schema["properties"].get(property).is_some(),
                "{type_name:?} schema should have '{property}'"
            );
        }
    }
}
