mod add;
mod delete;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryCommands;
use crate::context::AppContext;

/// Handle `maiato history`.
pub async fn handle(
    action: &HistoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HistoryCommands::Add {
            customer,
            occurrence,
            date,
            response,
            urgent,
        } => {
            add::run(
                customer,
                occurrence,
                date.as_deref(),
                response.as_deref(),
                *urgent,
                ctx,
                flags,
            )
            .await
        }
        HistoryCommands::List { customer } => list::run(customer, ctx, flags).await,
        HistoryCommands::Update {
            id,
            occurrence,
            date,
            response,
            urgent,
            viewed,
        } => {
            update::run(
                id,
                occurrence.as_deref(),
                date.as_deref(),
                response.as_deref(),
                *urgent,
                *viewed,
                ctx,
                flags,
            )
            .await
        }
        HistoryCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
