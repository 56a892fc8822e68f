use maiato_core::enums::ReceiptType;
use maiato_db::updates::receipt::{ReceiptUpdate, ReceiptUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{clearable, parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Raw `receipt update` flag values.
pub struct Args<'a> {
    pub receipt_type: Option<&'a str>,
    pub amount: Option<f64>,
    pub sub_type: Option<&'a str>,
    pub description: Option<&'a str>,
    pub date: Option<&'a str>,
}

pub async fn run(
    id: &str,
    args: &Args<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build(args)?;
    if update.is_empty() {
        anyhow::bail!("nothing to update: pass at least one of --type, --amount, --sub-type, --description, --date");
    }
    let receipt = ctx.service.update_receipt(id, update).await?;
    output(&receipt, flags.format)
}

fn build(args: &Args<'_>) -> anyhow::Result<ReceiptUpdate> {
    let mut builder = ReceiptUpdateBuilder::new();
    if let Some(raw) = args.receipt_type {
        builder = builder.receipt_type(parse_enum::<ReceiptType>(raw, "type")?);
    }
    if let Some(amount) = args.amount {
        builder = builder.amount(amount);
    }
    if let Some(sub_type) = clearable(args.sub_type) {
        builder = builder.sub_type(sub_type);
    }
    if let Some(description) = clearable(args.description) {
        builder = builder.description(description);
    }
    if let Some(date) = parse_date(args.date, "date")? {
        builder = builder.issue_date(date);
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: Args<'static> = Args {
        receipt_type: None,
        amount: None,
        sub_type: None,
        description: None,
        date: None,
    };

    #[test]
    fn no_flags_means_empty_update() {
        assert!(build(&NONE).unwrap().is_empty());
    }

    #[test]
    fn empty_sub_type_clears_it() {
        let update = build(&Args {
            sub_type: Some(""),
            amount: Some(80.0),
            ..NONE
        })
        .unwrap();
        assert_eq!(update.sub_type, Some(None));
        assert_eq!(update.amount, Some(80.0));
        assert!(update.receipt_type.is_none());
    }

    #[test]
    fn bad_type_is_rejected_before_the_database() {
        let err = build(&Args {
            receipt_type: Some("fatura"),
            ..NONE
        })
        .unwrap_err();
        assert!(err.to_string().contains("invalid type"));
    }
}
