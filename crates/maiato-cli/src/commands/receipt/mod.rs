mod create;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReceiptCommands;
use crate::context::AppContext;

/// Handle `maiato receipt`.
pub async fn handle(
    action: &ReceiptCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReceiptCommands::Create {
            customer,
            receipt_type,
            amount,
            sub_type,
            description,
            date,
        } => {
            let args = create::Args {
                receipt_type,
                amount: *amount,
                sub_type: sub_type.as_deref(),
                description: description.as_deref(),
                date: date.as_deref(),
            };
            create::run(customer, &args, ctx, flags).await
        }
        ReceiptCommands::List {
            customer,
            receipt_type,
        } => list::run(customer, receipt_type.as_deref(), ctx, flags).await,
        ReceiptCommands::Update {
            id,
            receipt_type,
            amount,
            sub_type,
            description,
            date,
        } => {
            let args = update::Args {
                receipt_type: receipt_type.as_deref(),
                amount: *amount,
                sub_type: sub_type.as_deref(),
                description: description.as_deref(),
                date: date.as_deref(),
            };
            update::run(id, &args, ctx, flags).await
        }
    }
}
