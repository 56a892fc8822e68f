use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    completed: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let reminder = ctx.service.set_reminder_completed(id, completed).await?;
    output(&reminder, flags.format)
}
