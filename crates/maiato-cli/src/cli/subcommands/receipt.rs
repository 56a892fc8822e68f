use clap::Subcommand;

/// Receipt commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReceiptCommands {
    /// Issue a receipt to a customer.
    Create {
        customer: String,
        /// Receipt type: contabilidade or seguro
        #[arg(long = "type")]
        receipt_type: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        sub_type: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Issue date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List a customer's receipts, newest first.
    List {
        customer: String,
        #[arg(long = "type")]
        receipt_type: Option<String>,
    },
    /// Correct a receipt. The receipt number never changes.
    Update {
        id: String,
        #[arg(long = "type")]
        receipt_type: Option<String>,
        #[arg(long)]
        amount: Option<f64>,
        /// Empty string clears it
        #[arg(long)]
        sub_type: Option<String>,
        /// Empty string clears it
        #[arg(long)]
        description: Option<String>,
        /// Issue date, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
}
