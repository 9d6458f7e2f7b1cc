use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hvac manufacturers`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let manufacturers = ctx.service.list_manufacturers().await?;
    output(&manufacturers, flags.format)
}
