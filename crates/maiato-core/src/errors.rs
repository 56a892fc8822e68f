//! Cross-cutting error types for Maiato.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `ConfigError`) are defined in
//! their respective crates. They converge into `anyhow` in `maiato-cli`.

use thiserror::Error;

/// Errors raised while parsing or checking core values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation before reaching the database.
    #[error("Validation error: {0}")]
    Validation(String),
}
