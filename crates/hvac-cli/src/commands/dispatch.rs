use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed catalog command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Equipment { action } => commands::equipment::handle(&action, ctx, flags).await,
        Commands::Manufacturers => commands::manufacturers::handle(ctx, flags).await,
        Commands::Calculate(_) | Commands::Screening | Commands::Schema(_) => {
            anyhow::bail!("calculate/screening/schema are pre-dispatched in main")
        }
    }
}
