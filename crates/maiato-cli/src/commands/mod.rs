pub mod audit;
pub mod customer;
pub mod dispatch;
pub mod family;
pub mod history;
pub mod receipt;
pub mod reminder;
pub mod shared;
