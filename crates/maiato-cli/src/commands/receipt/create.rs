use maiato_core::entities::NewReceipt;
use maiato_core::enums::ReceiptType;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Raw `receipt create` flag values.
pub struct Args<'a> {
    pub receipt_type: &'a str,
    pub amount: f64,
    pub sub_type: Option<&'a str>,
    pub description: Option<&'a str>,
    pub date: Option<&'a str>,
}

pub async fn run(
    customer: &str,
    args: &Args<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let new = NewReceipt {
        receipt_type: parse_enum::<ReceiptType>(args.receipt_type, "type")?,
        sub_type: args.sub_type.map(String::from),
        amount: args.amount,
        description: args.description.map(String::from),
        issue_date: parse_date(args.date, "date")?,
    };
    let receipt = ctx.service.create_receipt(customer, &new).await?;
    output(&receipt, flags.format)
}
