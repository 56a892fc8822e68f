use clap::Subcommand;

/// Customer commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CustomerCommands {
    /// Create a customer.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        nif: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Get a customer by ID.
    Get { id: String },
    /// List customers, newest first, or search by name/NIF.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Update a customer. Pass an empty string to clear an optional field.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        nif: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a customer and their family links.
    Delete { id: String },
    /// Customers that can be linked to the given one.
    Candidates { owner: String },
}
