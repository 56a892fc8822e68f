mod customer;
mod family;
mod history;
mod receipt;
mod reminder;

pub use customer::CustomerCommands;
pub use family::FamilyCommands;
pub use history::HistoryCommands;
pub use receipt::ReceiptCommands;
pub use reminder::ReminderCommands;
