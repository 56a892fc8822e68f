use clap::Subcommand;

/// Family relationship commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FamilyCommands {
    /// List a customer's family members.
    List { customer: String },
    /// Create a new customer as a relative of `owner`.
    Add {
        owner: String,
        #[arg(long)]
        name: String,
        /// Relationship from the owner's perspective (avo, pai, conjuge, filho, neto, outro)
        #[arg(long)]
        relationship: String,
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
    /// Link two existing customers.
    Link {
        owner: String,
        target: String,
        /// Relationship from the owner's perspective (avo, pai, conjuge, filho, neto, outro)
        #[arg(long)]
        relationship: String,
    },
    /// Remove a relationship (both sides) by the id of either row.
    Unlink { link_id: String },
    /// Show the reciprocal of a relationship label.
    Reciprocal { label: String },
}
