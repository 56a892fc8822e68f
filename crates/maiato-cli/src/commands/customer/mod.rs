mod candidates;
mod create;
mod delete;
mod get;
mod list;
mod update;

use maiato_core::entities::NewCustomer;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CustomerCommands;
use crate::context::AppContext;

/// Handle `maiato customer`.
pub async fn handle(
    action: &CustomerCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CustomerCommands::Create {
            name,
            email,
            phone,
            nif,
            address,
            notes,
        } => {
            let new = NewCustomer {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                nif: nif.clone(),
                address: address.clone(),
                notes: notes.clone(),
            };
            create::run(&new, ctx, flags).await
        }
        CustomerCommands::Get { id } => get::run(id, ctx, flags).await,
        CustomerCommands::List { search, limit } => {
            list::run(search.as_deref(), *limit, ctx, flags).await
        }
        CustomerCommands::Update {
            id,
            name,
            email,
            phone,
            nif,
            address,
            notes,
        } => {
            let fields = update::Fields {
                name: name.as_deref(),
                email: email.as_deref(),
                phone: phone.as_deref(),
                nif: nif.as_deref(),
                address: address.as_deref(),
                notes: notes.as_deref(),
            };
            update::run(id, &fields, ctx, flags).await
        }
        CustomerCommands::Delete { id } => delete::run(id, ctx, flags).await,
        CustomerCommands::Candidates { owner } => candidates::run(owner, ctx, flags).await,
    }
}
