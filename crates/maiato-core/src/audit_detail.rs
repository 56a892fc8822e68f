//! Typed audit detail payloads.
//!
//! Each audit action can carry a structured `detail` JSON blob. These types
//! provide schema validation for the most common detail shapes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Detail for `AuditAction::Linked`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LinkedDetail {
    pub customer_id: String,
    pub related_customer_id: String,
    pub relationship: String,
    pub reciprocal: String,
    pub reverse_link_id: String,
}

/// Detail for `AuditAction::Unlinked`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UnlinkedDetail {
    pub customer_id: String,
    pub related_customer_id: String,
    pub relationship: String,
    /// Rows deleted: 2 for a full pair, 1 when the mirror was already gone.
    pub rows_removed: u64,
}

/// Detail for `AuditAction::Created` on numbered records (receipts, historial).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NumberedDetail {
    pub customer_id: String,
    pub number: String,
}

/// Detail for audit actions on reminders.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReminderDetail {
    pub customer_id: String,
    pub title: String,
    /// Due time, `YYYY-MM-DDTHH:MM:SS`.
    pub reminder_date: String,
}
