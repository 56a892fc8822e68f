//! General application configuration.

use serde::{Deserialize, Serialize};

/// User id recorded when no authenticated user is known.
pub const ANONYMOUS_USER_ID: &str = "00000000-0000-0000-0000-000000000000";

fn default_user_id() -> String {
    ANONYMOUS_USER_ID.to_string()
}

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

fn default_receipt_prefix() -> String {
    "REC".to_string()
}

fn default_historial_prefix() -> String {
    "H".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// User id stamped on created rows and audit entries.
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Prefix of generated receipt numbers (`REC-20261017-001`).
    #[serde(default = "default_receipt_prefix")]
    pub receipt_prefix: String,

    /// Prefix of generated historial numbers (`H0001`).
    #[serde(default = "default_historial_prefix")]
    pub historial_prefix: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            default_limit: default_limit(),
            receipt_prefix: default_receipt_prefix(),
            historial_prefix: default_historial_prefix(),
        }
    }
}
