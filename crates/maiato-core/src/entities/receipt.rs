use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ReceiptType;

/// A receipt issued to a customer, numbered `REC-YYYYMMDD-NNN`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Receipt {
    pub id: String,
    pub customer_id: String,
    pub receipt_number: String,
    pub receipt_type: ReceiptType,
    pub sub_type: Option<String>,
    pub amount: f64,
    pub description: Option<String>,
    pub issue_date: NaiveDate,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for a new receipt. The number is assigned on insert; a missing
/// issue date means today.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewReceipt {
    pub receipt_type: ReceiptType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
}
