//! libSQL / Turso database configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default path of the local database file, relative to the working directory.
fn default_local_path() -> String {
    ".maiato/maiato.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Remote database URL (e.g., `libsql://maiato-office.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,

    /// Local database file used when no remote is configured.
    #[serde(default = "default_local_path")]
    pub local_path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            auth_token: String::new(),
            local_path: default_local_path(),
        }
    }
}

impl DatabaseConfig {
    /// Check if a remote database is configured (URL and token both set).
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Reject a half-configured remote (URL without token or the reverse).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the missing field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.url.is_empty() && self.auth_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.auth_token".into(),
                reason: "required when database.url is set".into(),
            });
        }
        if self.url.is_empty() && !self.auth_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.url".into(),
                reason: "required when database.auth_token is set".into(),
            });
        }
        if !self.url.is_empty()
            && !["libsql://", "https://", "http://"]
                .iter()
                .any(|scheme| self.url.starts_with(scheme))
        {
            return Err(ConfigError::InvalidValue {
                field: "database.url".into(),
                reason: format!("unsupported scheme in '{}'", self.url),
            });
        }
        Ok(())
    }
}
