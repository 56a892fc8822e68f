use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, Deleted};

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let customer = ctx.service.delete_customer(id).await?;
    output(
        &Deleted {
            deleted: "customer",
            id: customer.id,
            label: customer.name,
        },
        flags.format,
    )
}
