use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(link_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ctx.service.unlink_family_member(link_id).await?;
    output(&response, flags.format)
}
