//! # maiato-db
//!
//! libSQL database operations for the Maiato back-office.
//!
//! Holds customers, family links, historial entries, receipts, and the audit
//! trail. The database is either a local file (or `:memory:` in tests) or a
//! remote libSQL/Turso endpoint.
//!
//! All operations are methods on [`service::MaiatoService`], split across the
//! `repos` modules. The family linker lives in [`repos::family`].

pub mod error;
pub mod helpers;
mod migrations;
pub mod notify;
pub mod numbering;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
pub(crate) mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and its single connection. Every statement the
/// service issues, including transactions, goes through this connection.
pub struct MaiatoDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl MaiatoDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        Self::init(db, false).await
    }

    /// Open a remote libSQL/Turso database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        Self::init(db, true).await
    }

    async fn init(db: libsql::Database, remote: bool) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let maiato_db = Self { db, conn, remote };
        maiato_db.run_migrations().await?;
        tracing::debug!(remote, "database opened");
        Ok(maiato_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether this handle talks to a remote endpoint.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"cus-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        generate_id_on(&self.conn, prefix).await
    }
}

/// Generate a prefixed ID on a specific connection (or transaction).
pub(crate) async fn generate_id_on(
    conn: &libsql::Connection,
    prefix: &str,
) -> Result<String, DatabaseError> {
    let mut rows = conn
        .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<String>(0)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> MaiatoDb {
        MaiatoDb::open_local(":memory:").await.unwrap()
    }

    async fn insert_customer(db: &MaiatoDb, id: &str, name: &str) {
        db.conn()
            .execute(
                "INSERT INTO customers (id, name, user_id) VALUES (?1, ?2, 'usr')",
                [id, name],
            )
            .await
            .unwrap();
    }

    async fn count(db: &MaiatoDb, table: &str) -> i64 {
        let mut rows = db
            .conn()
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await
            .unwrap();
        rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;
        assert!(!db.is_remote());

        for table in [
            "customers",
            "family_members",
            "historial",
            "receipts",
            "reminders",
            "audit_trail",
        ] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("cus").await.unwrap();
        assert!(id.starts_with("cus-"), "ID should start with 'cus-': {id}");
        assert_eq!(id.len(), 12, "3 prefix + 1 dash + 8 hex: {id}");
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in maiato_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("fam").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn family_link_requires_existing_customers() {
        let db = test_db().await;
        insert_customer(&db, "cus-1", "Maria").await;

        let result = db
            .conn()
            .execute(
                "INSERT INTO family_members (id, customer_id, customer_ref_id, relationship)
                 VALUES ('fam-1', 'cus-1', 'cus-missing', 'pai')",
                (),
            )
            .await;
        assert!(result.is_err(), "FK on customer_ref_id should reject");
    }

    #[tokio::test]
    async fn relationship_check_rejects_unknown_codes() {
        let db = test_db().await;
        insert_customer(&db, "cus-1", "Maria").await;
        insert_customer(&db, "cus-2", "João").await;

        let result = db
            .conn()
            .execute(
                "INSERT INTO family_members (id, customer_id, customer_ref_id, relationship)
                 VALUES ('fam-1', 'cus-1', 'cus-2', 'primo')",
                (),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn deleting_customer_cascades_both_directions() {
        let db = test_db().await;
        insert_customer(&db, "cus-1", "Maria").await;
        insert_customer(&db, "cus-2", "João").await;
        db.conn()
            .execute_batch(
                "INSERT INTO family_members (id, customer_id, customer_ref_id, relationship)
                 VALUES ('fam-1', 'cus-1', 'cus-2', 'conjuge'),
                        ('fam-2', 'cus-2', 'cus-1', 'conjuge');",
            )
            .await
            .unwrap();

        db.conn()
            .execute("DELETE FROM customers WHERE id = 'cus-2'", ())
            .await
            .unwrap();

        assert_eq!(count(&db, "family_members").await, 0);
    }

    #[tokio::test]
    async fn file_backed_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maiato.db");
        let path = path.to_str().unwrap();

        {
            let db = MaiatoDb::open_local(path).await.unwrap();
            insert_customer(&db, "cus-1", "Maria").await;
        }

        let db = MaiatoDb::open_local(path).await.unwrap();
        assert_eq!(count(&db, "customers").await, 1);
    }
}
