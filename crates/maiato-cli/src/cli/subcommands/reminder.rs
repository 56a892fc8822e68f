use clap::Subcommand;

/// Reminder commands. Dates and times are local wall-clock time.
#[derive(Clone, Debug, Subcommand)]
pub enum ReminderCommands {
    /// Add a reminder for a customer.
    Add {
        customer: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Due date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Due time, HH:MM (default: 09:00)
        #[arg(long)]
        time: Option<String>,
    },
    /// List a customer's reminders, soonest first.
    List { customer: String },
    /// Change a reminder. Pass an empty description to clear it.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// New due date, YYYY-MM-DD (keeps the current time unless --time is given)
        #[arg(long)]
        date: Option<String>,
        /// New due time, HH:MM (keeps the current date unless --date is given)
        #[arg(long)]
        time: Option<String>,
    },
    /// Mark a reminder done.
    Done {
        id: String,
        /// Open it again instead
        #[arg(long)]
        undo: bool,
    },
    /// Delete a reminder.
    Delete { id: String },
}
