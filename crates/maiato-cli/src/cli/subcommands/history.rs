use clap::Subcommand;

/// Historial commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// Add an entry to a customer's history.
    Add {
        customer: String,
        #[arg(long)]
        occurrence: String,
        /// Occurrence date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        response: Option<String>,
        #[arg(long)]
        urgent: bool,
    },
    /// List a customer's history: urgent first, then newest first.
    List { customer: String },
    /// Update a history entry.
    Update {
        id: String,
        #[arg(long)]
        occurrence: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        response: Option<String>,
        #[arg(long)]
        urgent: Option<bool>,
        #[arg(long)]
        viewed: Option<bool>,
    },
    /// Delete a history entry. Other entries keep their numbers.
    Delete { id: String },
}
