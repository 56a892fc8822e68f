use maiato_core::entities::NewCustomer;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(new: &NewCustomer, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let customer = ctx.service.create_customer(new).await?;
    output(&customer, flags.format)
}
