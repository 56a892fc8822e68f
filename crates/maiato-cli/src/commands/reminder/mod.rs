mod add;
mod delete;
mod done;
mod list;
mod update;

use chrono::{NaiveDateTime, NaiveTime};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReminderCommands;
use crate::commands::shared::parse::{parse_date, parse_time};
use crate::context::AppContext;

/// Reminders without `--time` are due at the start of the office day.
fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Handle `maiato reminder`.
pub async fn handle(
    action: &ReminderCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReminderCommands::Add {
            customer,
            title,
            description,
            date,
            time,
        } => {
            let args = add::Args {
                title,
                description: description.as_deref(),
                date: date.as_deref(),
                time: time.as_deref(),
            };
            add::run(customer, &args, ctx, flags).await
        }
        ReminderCommands::List { customer } => list::run(customer, ctx, flags).await,
        ReminderCommands::Update {
            id,
            title,
            description,
            date,
            time,
        } => {
            let args = update::Args {
                title: title.as_deref(),
                description: description.as_deref(),
                date: date.as_deref(),
                time: time.as_deref(),
            };
            update::run(id, &args, ctx, flags).await
        }
        ReminderCommands::Done { id, undo } => done::run(id, !*undo, ctx, flags).await,
        ReminderCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}

/// Combine `--date` and `--time`, taking whichever is missing from `base`.
fn due_at(
    date: Option<&str>,
    time: Option<&str>,
    base: NaiveDateTime,
) -> anyhow::Result<NaiveDateTime> {
    let date = parse_date(date, "date")?.unwrap_or_else(|| base.date());
    let time = parse_time(time, "time")?.unwrap_or_else(|| base.time());
    Ok(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_time(default_time())
    }

    #[test]
    fn missing_parts_come_from_base() {
        assert_eq!(due_at(None, None, base()).unwrap(), base());
        assert_eq!(
            due_at(Some("2026-11-02"), None, base()).unwrap().to_string(),
            "2026-11-02 09:00:00"
        );
        assert_eq!(
            due_at(None, Some("17:45"), base()).unwrap().to_string(),
            "2026-10-17 17:45:00"
        );
    }

    #[test]
    fn bad_parts_are_reported() {
        assert!(due_at(Some("02/11/2026"), None, base()).is_err());
        assert!(due_at(None, Some("25:00"), base()).is_err());
    }
}
