use chrono::Local;
use maiato_core::entities::NewReminder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

use super::{default_time, due_at};

/// Raw `reminder add` flag values.
pub struct Args<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub date: Option<&'a str>,
    pub time: Option<&'a str>,
}

pub async fn run(
    customer: &str,
    args: &Args<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let today = Local::now().date_naive().and_time(default_time());
    let new = NewReminder {
        title: args.title.to_string(),
        description: args.description.map(String::from),
        reminder_date: due_at(args.date, args.time, today)?,
    };
    let reminder = ctx.service.add_reminder(customer, &new).await?;
    output(&reminder, flags.format)
}
