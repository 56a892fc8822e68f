use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(customer: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reminders = ctx.service.list_reminders(customer).await?;
    output(&reminders, flags.format)
}
