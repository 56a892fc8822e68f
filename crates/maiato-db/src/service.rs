//! Service layer orchestrating database mutations with audit and notifications.
//!
//! `MaiatoService` wraps `MaiatoDb` (raw database access) and a [`Notifier`]
//! (user-facing notices and cache invalidation). All repo methods are
//! implemented as `impl MaiatoService` blocks.

use std::sync::Arc;

use maiato_config::{ANONYMOUS_USER_ID, MaiatoConfig};

use crate::MaiatoDb;
use crate::error::DatabaseError;
use crate::notify::{Notice, Notifier, StaleQuery, TracingNotifier};

/// Orchestrates database mutations with audit trail and notifications.
///
/// Every mutation method follows this protocol:
/// 1. Validate input (no statement issued on failure)
/// 2. Execute SQL, inside a transaction when more than one row changes
/// 3. Append audit entry (inside the same transaction)
/// 4. Commit, or roll back on any failure
/// 5. Report: success notice plus invalidations, or an error notice
pub struct MaiatoService {
    db: MaiatoDb,
    notifier: Arc<dyn Notifier>,
    user_id: String,
    receipt_prefix: String,
    historial_prefix: String,
}

impl MaiatoService {
    /// Create a new service wrapping a local database (`":memory:"` for tests).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = MaiatoDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    /// Create a service backed by a remote libSQL/Turso database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the remote database cannot be reached.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = MaiatoDb::open_remote(url, auth_token).await?;
        Ok(Self::from_db(db))
    }

    /// Open the database described by `config` and apply its general settings.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open(config: &MaiatoConfig) -> Result<Self, DatabaseError> {
        let db = if config.database.is_remote() {
            MaiatoDb::open_remote(&config.database.url, &config.database.auth_token).await?
        } else {
            MaiatoDb::open_local(&config.database.local_path).await?
        };
        let mut service = Self::from_db(db);
        service.user_id.clone_from(&config.general.user_id);
        service
            .receipt_prefix
            .clone_from(&config.general.receipt_prefix);
        service
            .historial_prefix
            .clone_from(&config.general.historial_prefix);
        Ok(service)
    }

    /// Create from an existing `MaiatoDb` with default settings.
    #[must_use]
    pub fn from_db(db: MaiatoDb) -> Self {
        Self {
            db,
            notifier: Arc::new(TracingNotifier),
            user_id: ANONYMOUS_USER_ID.to_string(),
            receipt_prefix: "REC".to_string(),
            historial_prefix: "H".to_string(),
        }
    }

    /// Replace the notification sink.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Set the user recorded on created rows and audit entries.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &MaiatoDb {
        &self.db
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn receipt_prefix(&self) -> &str {
        &self.receipt_prefix
    }

    #[must_use]
    pub fn historial_prefix(&self) -> &str {
        &self.historial_prefix
    }

    /// Route the outcome of a mutation to the notifier, then hand it back.
    ///
    /// On success every query named by `stale` is invalidated and a success
    /// notice is emitted. On failure an error notice prefixed with
    /// `error_prefix` is emitted. The result itself is never altered.
    pub(crate) fn report<T>(
        &self,
        result: Result<T, DatabaseError>,
        success: impl FnOnce(&T) -> String,
        error_prefix: &str,
        stale: impl FnOnce(&T) -> Vec<StaleQuery>,
    ) -> Result<T, DatabaseError> {
        match &result {
            Ok(value) => {
                for query in stale(value) {
                    self.notifier.invalidate(&query);
                }
                self.notifier.notice(Notice::success(success(value)));
            }
            Err(e) => {
                tracing::warn!(error = %e, "{error_prefix}");
                self.notifier
                    .notice(Notice::error(format!("{error_prefix}: {e}")));
            }
        }
        result
    }
}

/// Commit `tx` when `result` is `Ok`, roll it back otherwise.
///
/// A failed rollback is logged; the original error is the one returned.
pub(crate) async fn finish<T>(
    tx: libsql::Transaction,
    result: Result<T, DatabaseError>,
) -> Result<T, DatabaseError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(error = %rollback, "transaction rollback failed");
            }
            Err(e)
        }
    }
}
