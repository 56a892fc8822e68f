use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, CustomerCard};

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let customer = ctx.service.get_customer(id).await?;
    let family = ctx.service.list_family_members(id).await?;
    output(&CustomerCard { customer, family }, flags.format)
}
