use hvac_core::questionnaire::screening_questionnaire;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `hvac screening`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&screening_questionnaire(), flags.format)
}
