use maiato_core::enums::ReceiptType;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    customer: &str,
    receipt_type: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let receipt_type = receipt_type
        .map(|value| parse_enum::<ReceiptType>(value, "type"))
        .transpose()?;
    let receipts = ctx.service.list_receipts(customer, receipt_type).await?;
    output(&receipts, flags.format)
}
