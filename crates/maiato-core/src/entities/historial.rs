use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A numbered occurrence in a customer's history (`H0001`, `H0002`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistorialEntry {
    pub id: String,
    pub customer_id: String,
    pub historial_number: String,
    pub occurrence: String,
    pub occurrence_date: NaiveDate,
    pub response: Option<String>,
    pub urgent: bool,
    pub viewed: bool,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for a new historial entry. The number is assigned on insert.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewHistorial {
    pub occurrence: String,
    pub occurrence_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default)]
    pub urgent: bool,
}
