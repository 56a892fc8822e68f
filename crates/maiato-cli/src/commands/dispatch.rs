use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Customer { action } => commands::customer::handle(&action, ctx, flags).await,
        Commands::Family { action } => commands::family::handle(&action, ctx, flags).await,
        Commands::History { action } => commands::history::handle(&action, ctx, flags).await,
        Commands::Receipt { action } => commands::receipt::handle(&action, ctx, flags).await,
        Commands::Reminder { action } => commands::reminder::handle(&action, ctx, flags).await,
        Commands::Audit(args) => commands::audit::handle(&args, ctx, flags).await,
    }
}
