use maiato_db::updates::reminder::ReminderUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::clearable;
use crate::context::AppContext;
use crate::output::output;

use super::due_at;

/// Raw `reminder update` flag values.
pub struct Args<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub date: Option<&'a str>,
    pub time: Option<&'a str>,
}

pub async fn run(
    id: &str,
    args: &Args<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = ReminderUpdateBuilder::new();
    if let Some(title) = args.title {
        builder = builder.title(title);
    }
    if let Some(description) = clearable(args.description) {
        builder = builder.description(description);
    }
    if args.date.is_some() || args.time.is_some() {
        let current = ctx.service.get_reminder(id).await?;
        builder = builder.reminder_date(due_at(args.date, args.time, current.reminder_date)?);
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!("nothing to update: pass at least one of --title, --description, --date, --time");
    }
    let reminder = ctx.service.update_reminder(id, update).await?;
    output(&reminder, flags.format)
}
