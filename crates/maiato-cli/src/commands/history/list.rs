use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(customer: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entries = ctx.service.list_historial(customer).await?;
    output(&entries, flags.format)
}
