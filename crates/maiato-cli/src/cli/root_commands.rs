use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    CustomerCommands, FamilyCommands, HistoryCommands, ReceiptCommands, ReminderCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Customer records.
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },
    /// Family relationships between customers.
    Family {
        #[command(subcommand)]
        action: FamilyCommands,
    },
    /// Customer history (historial) entries.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Accounting receipts.
    Receipt {
        #[command(subcommand)]
        action: ReceiptCommands,
    },
    /// Dated reminders attached to a customer.
    Reminder {
        #[command(subcommand)]
        action: ReminderCommands,
    },
    /// Query the audit trail.
    Audit(AuditArgs),
}

/// Arguments for `maiato audit`.
#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    #[arg(long)]
    pub entity_type: Option<String>,
    #[arg(long)]
    pub entity_id: Option<String>,
    #[arg(long)]
    pub action: Option<String>,
    #[arg(long)]
    pub user: Option<String>,
}
