//! Entity structs for the Maiato back-office records.
//!
//! Each entity maps to a table in the libSQL database (see
//! `maiato-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod audit;
mod customer;
mod family;
mod historial;
mod receipt;
mod reminder;

pub use audit::AuditEntry;
pub use customer::{Customer, CustomerSummary, NewCustomer};
pub use family::{FamilyLink, FamilyLinkPair};
pub use historial::{HistorialEntry, NewHistorial};
pub use receipt::{NewReceipt, Receipt};
pub use reminder::{NewReminder, Reminder};
