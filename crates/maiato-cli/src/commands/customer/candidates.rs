use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(owner: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let candidates = ctx.service.list_link_candidates(owner).await?;
    output(&candidates, flags.format)
}
