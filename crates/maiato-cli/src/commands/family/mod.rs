mod add;
mod link;
mod list;
mod reciprocal;
mod unlink;

use maiato_core::entities::NewCustomer;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FamilyCommands;
use crate::context::AppContext;

/// Handle `maiato family`.
pub async fn handle(
    action: &FamilyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FamilyCommands::List { customer } => list::run(customer, ctx, flags).await,
        FamilyCommands::Add {
            owner,
            name,
            relationship,
            email,
            phone,
            nif,
            address,
            notes,
        } => {
            let relative = NewCustomer {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                nif: nif.clone(),
                address: address.clone(),
                notes: notes.clone(),
            };
            add::run(owner, &relative, relationship, ctx, flags).await
        }
        FamilyCommands::Link {
            owner,
            target,
            relationship,
        } => link::run(owner, target, relationship, ctx, flags).await,
        FamilyCommands::Unlink { link_id } => unlink::run(link_id, ctx, flags).await,
        FamilyCommands::Reciprocal { label } => reciprocal::run(label, flags),
    }
}
