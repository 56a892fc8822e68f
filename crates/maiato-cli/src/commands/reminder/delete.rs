use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, Deleted};

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reminder = ctx.service.delete_reminder(id).await?;
    output(
        &Deleted {
            deleted: "reminder",
            id: reminder.id,
            label: reminder.title,
        },
        flags.format,
    )
}
