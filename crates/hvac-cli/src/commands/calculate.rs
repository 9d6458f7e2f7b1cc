use hvac_config::HvacConfig;
use hvac_core::screening::{LoadCalculationResult, ScreeningAnswers};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CalculateArgs;
use crate::commands::shared::read_json;
use crate::output::output;

/// Handle `hvac calculate`.
pub fn handle(args: &CalculateArgs, config: &HvacConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let answers: ScreeningAnswers = read_json(args.input.as_deref(), "screening answers")?;
    output(&estimate(&answers, config), flags.format)
}

fn estimate(answers: &ScreeningAnswers, config: &HvacConfig) -> LoadCalculationResult {
    hvac_sizing::calculate_load(answers, &config.estimation)
}
