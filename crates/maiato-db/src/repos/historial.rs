//! Historial repository: numbered per-customer occurrence history.

use chrono::Utc;

use maiato_core::audit_detail::NumberedDetail;
use maiato_core::entities::{HistorialEntry, NewHistorial};
use maiato_core::enums::{AuditAction, EntityType};
use maiato_core::ids::PREFIX_HISTORIAL;

use crate::error::DatabaseError;
use crate::generate_id_on;
use crate::helpers::{
    get_bool, get_opt_string, non_blank, parse_date, parse_datetime, require_non_blank, to_json,
};
use crate::notify::StaleQuery;
use crate::numbering::next_historial_number;
use crate::repos::ensure_exists_on;
use crate::service::{MaiatoService, finish};
use crate::updates::historial::HistorialUpdate;

const HISTORIAL_COLUMNS: &str = "id, customer_id, historial_number, occurrence, occurrence_date, \
     response, urgent, viewed, user_id, created_at, updated_at";

fn row_to_historial(row: &libsql::Row) -> Result<HistorialEntry, DatabaseError> {
    Ok(HistorialEntry {
        id: row.get::<String>(0)?,
        customer_id: row.get::<String>(1)?,
        historial_number: row.get::<String>(2)?,
        occurrence: row.get::<String>(3)?,
        occurrence_date: parse_date(&row.get::<String>(4)?)?,
        response: get_opt_string(row, 5)?,
        urgent: get_bool(row, 6)?,
        viewed: get_bool(row, 7)?,
        user_id: row.get::<String>(8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
        updated_at: parse_datetime(&row.get::<String>(10)?)?,
    })
}

impl MaiatoService {
    /// Add an occurrence to a customer's history, numbered after the
    /// customer's existing entries.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if the occurrence is blank, or
    /// `DatabaseError::NotFound` if the customer does not exist.
    pub async fn add_historial(
        &self,
        customer_id: &str,
        new: &NewHistorial,
    ) -> Result<HistorialEntry, DatabaseError> {
        let result = self.add_historial_inner(customer_id, new).await;
        self.report(
            result,
            |h| format!("Historial {} added", h.historial_number),
            "Failed to add historial entry",
            |h| vec![StaleQuery::Historial(h.customer_id.clone())],
        )
    }

    async fn add_historial_inner(
        &self,
        customer_id: &str,
        new: &NewHistorial,
    ) -> Result<HistorialEntry, DatabaseError> {
        let customer_id = require_non_blank(customer_id, "customer")?;
        let occurrence = require_non_blank(&new.occurrence, "occurrence")?;

        let tx = self.db().conn().transaction().await?;
        let result = async {
            ensure_exists_on(&tx, EntityType::Customer, customer_id).await?;

            let mut rows = tx
                .query(
                    "SELECT historial_number FROM historial WHERE customer_id = ?1",
                    [customer_id],
                )
                .await?;
            let mut existing = Vec::new();
            while let Some(row) = rows.next().await? {
                existing.push(row.get::<String>(0)?);
            }

            let now = Utc::now();
            let entry = HistorialEntry {
                id: generate_id_on(&tx, PREFIX_HISTORIAL).await?,
                customer_id: customer_id.to_string(),
                historial_number: next_historial_number(
                    self.historial_prefix(),
                    existing.iter().map(String::as_str),
                ),
                occurrence: occurrence.to_string(),
                occurrence_date: new.occurrence_date,
                response: non_blank(new.response.as_deref()).map(String::from),
                urgent: new.urgent,
                viewed: false,
                user_id: self.user_id().to_string(),
                created_at: now,
                updated_at: now,
            };

            tx.execute(
                "INSERT INTO historial (id, customer_id, historial_number, occurrence, occurrence_date,
                     response, urgent, viewed, user_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
                libsql::params![
                    entry.id.as_str(),
                    entry.customer_id.as_str(),
                    entry.historial_number.as_str(),
                    entry.occurrence.as_str(),
                    entry.occurrence_date.to_string(),
                    entry.response.as_deref(),
                    i64::from(entry.urgent),
                    i64::from(entry.viewed),
                    entry.user_id.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

            let detail = NumberedDetail {
                customer_id: entry.customer_id.clone(),
                number: entry.historial_number.clone(),
            };
            self.record_audit(
                &tx,
                EntityType::Historial,
                &entry.id,
                AuditAction::Created,
                Some(to_json(&detail)?),
            )
            .await?;
            Ok::<_, DatabaseError>(entry)
        }
        .await;
        finish(tx, result).await
    }

    /// Fetch one historial entry.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no entry has this id.
    pub async fn get_historial(&self, id: &str) -> Result<HistorialEntry, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {HISTORIAL_COLUMNS} FROM historial WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "historial entry",
            id: id.to_string(),
        })?;
        row_to_historial(&row)
    }

    /// A customer's history: urgent entries first, then by occurrence date,
    /// most recent first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_historial(
        &self,
        customer_id: &str,
    ) -> Result<Vec<HistorialEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {HISTORIAL_COLUMNS} FROM historial WHERE customer_id = ?1
                     ORDER BY urgent DESC, occurrence_date DESC, rowid DESC"
                ),
                [customer_id],
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_historial(&row)?);
        }
        Ok(entries)
    }

    /// Apply a partial update to a historial entry. The number never changes.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if the new occurrence is blank, or
    /// `DatabaseError::NotFound` if the entry does not exist.
    pub async fn update_historial(
        &self,
        historial_id: &str,
        update: HistorialUpdate,
    ) -> Result<HistorialEntry, DatabaseError> {
        let result = self.update_historial_inner(historial_id, update).await;
        self.report(
            result,
            |h| format!("Historial {} updated", h.historial_number),
            "Failed to update historial entry",
            |h| vec![StaleQuery::Historial(h.customer_id.clone())],
        )
    }

    async fn update_historial_inner(
        &self,
        historial_id: &str,
        update: HistorialUpdate,
    ) -> Result<HistorialEntry, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref occurrence) = update.occurrence {
            let occurrence = require_non_blank(occurrence, "occurrence")?;
            sets.push(format!("occurrence = ?{idx}"));
            params.push(occurrence.into());
            idx += 1;
        }
        if let Some(date) = update.occurrence_date {
            sets.push(format!("occurrence_date = ?{idx}"));
            params.push(date.to_string().into());
            idx += 1;
        }
        if let Some(ref response) = update.response {
            sets.push(format!("response = ?{idx}"));
            params.push(non_blank(response.as_deref()).into());
            idx += 1;
        }
        if let Some(urgent) = update.urgent {
            sets.push(format!("urgent = ?{idx}"));
            params.push(i64::from(urgent).into());
            idx += 1;
        }
        if let Some(viewed) = update.viewed {
            sets.push(format!("viewed = ?{idx}"));
            params.push(i64::from(viewed).into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_historial(historial_id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(historial_id.into());
        let sql = format!("UPDATE historial SET {} WHERE id = ?{idx}", sets.join(", "));

        let tx = self.db().conn().transaction().await?;
        let result = async {
            let changed = tx.execute(&sql, libsql::params_from_iter(params)).await?;
            if changed == 0 {
                return Err(DatabaseError::NotFound {
                    entity: "historial entry",
                    id: historial_id.to_string(),
                });
            }
            self.record_audit(
                &tx,
                EntityType::Historial,
                historial_id,
                AuditAction::Updated,
                Some(to_json(&update)?),
            )
            .await
        }
        .await;
        finish(tx, result).await?;

        self.get_historial(historial_id).await
    }

    /// Delete a historial entry. Later entries keep their numbers.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the entry does not exist.
    pub async fn delete_historial(
        &self,
        historial_id: &str,
    ) -> Result<HistorialEntry, DatabaseError> {
        let result = self.delete_historial_inner(historial_id).await;
        self.report(
            result,
            |h| format!("Historial {} deleted", h.historial_number),
            "Failed to delete historial entry",
            |h| vec![StaleQuery::Historial(h.customer_id.clone())],
        )
    }

    async fn delete_historial_inner(
        &self,
        historial_id: &str,
    ) -> Result<HistorialEntry, DatabaseError> {
        let entry = self.get_historial(historial_id).await?;

        let tx = self.db().conn().transaction().await?;
        let result = async {
            tx.execute("DELETE FROM historial WHERE id = ?1", [historial_id])
                .await?;
            let detail = NumberedDetail {
                customer_id: entry.customer_id.clone(),
                number: entry.historial_number.clone(),
            };
            self.record_audit(
                &tx,
                EntityType::Historial,
                historial_id,
                AuditAction::Deleted,
                Some(to_json(&detail)?),
            )
            .await
        }
        .await;
        finish(tx, result).await?;

        Ok(entry)
    }
}
