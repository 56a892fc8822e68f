//! Accounting receipt repository.
//!
//! Receipt numbers are `PREFIX-YYYYMMDD-NNN`, continuing the sequence of the
//! most recent receipt issued the same day.

use chrono::Utc;

use maiato_core::audit_detail::NumberedDetail;
use maiato_core::entities::{NewReceipt, Receipt};
use maiato_core::enums::{AuditAction, EntityType, ReceiptType};
use maiato_core::ids::PREFIX_RECEIPT;

use crate::error::DatabaseError;
use crate::generate_id_on;
use crate::helpers::{
    get_opt_string, non_blank, parse_date, parse_datetime, parse_enum, require_non_blank, to_json,
};
use crate::notify::StaleQuery;
use crate::numbering::next_receipt_number;
use crate::repos::ensure_exists_on;
use crate::service::{MaiatoService, finish};
use crate::updates::receipt::ReceiptUpdate;

const RECEIPT_COLUMNS: &str = "id, customer_id, receipt_number, type, sub_type, amount, \
     description, issue_date, user_id, created_at, updated_at";

fn row_to_receipt(row: &libsql::Row) -> Result<Receipt, DatabaseError> {
    Ok(Receipt {
        id: row.get::<String>(0)?,
        customer_id: row.get::<String>(1)?,
        receipt_number: row.get::<String>(2)?,
        receipt_type: parse_enum(&row.get::<String>(3)?)?,
        sub_type: get_opt_string(row, 4)?,
        amount: row.get::<f64>(5)?,
        description: get_opt_string(row, 6)?,
        issue_date: parse_date(&row.get::<String>(7)?)?,
        user_id: row.get::<String>(8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
        updated_at: parse_datetime(&row.get::<String>(10)?)?,
    })
}

fn validate_amount(amount: f64) -> Result<(), DatabaseError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(DatabaseError::Validation(format!(
            "amount must be a non-negative number, got {amount}"
        )));
    }
    Ok(())
}

impl MaiatoService {
    /// Issue a receipt to a customer.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a negative or non-finite
    /// amount, or `DatabaseError::NotFound` if the customer does not exist.
    pub async fn create_receipt(
        &self,
        customer_id: &str,
        new: &NewReceipt,
    ) -> Result<Receipt, DatabaseError> {
        let result = self.create_receipt_inner(customer_id, new).await;
        self.report(
            result,
            |r| format!("Receipt {} created", r.receipt_number),
            "Failed to create receipt",
            |r| vec![StaleQuery::Receipts(r.customer_id.clone())],
        )
    }

    async fn create_receipt_inner(
        &self,
        customer_id: &str,
        new: &NewReceipt,
    ) -> Result<Receipt, DatabaseError> {
        let customer_id = require_non_blank(customer_id, "customer")?;
        validate_amount(new.amount)?;

        let tx = self.db().conn().transaction().await?;
        let result = async {
            ensure_exists_on(&tx, EntityType::Customer, customer_id).await?;

            let mut rows = tx
                .query(
                    "SELECT receipt_number FROM receipts ORDER BY created_at DESC, rowid DESC LIMIT 1",
                    (),
                )
                .await?;
            let last = match rows.next().await? {
                Some(row) => Some(row.get::<String>(0)?),
                None => None,
            };

            let now = Utc::now();
            let today = now.date_naive();
            let receipt = Receipt {
                id: generate_id_on(&tx, PREFIX_RECEIPT).await?,
                customer_id: customer_id.to_string(),
                receipt_number: next_receipt_number(self.receipt_prefix(), last.as_deref(), today),
                receipt_type: new.receipt_type,
                sub_type: non_blank(new.sub_type.as_deref()).map(String::from),
                amount: new.amount,
                description: non_blank(new.description.as_deref()).map(String::from),
                issue_date: new.issue_date.unwrap_or(today),
                user_id: self.user_id().to_string(),
                created_at: now,
                updated_at: now,
            };

            tx.execute(
                "INSERT INTO receipts (id, customer_id, receipt_number, type, sub_type, amount,
                     description, issue_date, user_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
                libsql::params![
                    receipt.id.as_str(),
                    receipt.customer_id.as_str(),
                    receipt.receipt_number.as_str(),
                    receipt.receipt_type.as_str(),
                    receipt.sub_type.as_deref(),
                    receipt.amount,
                    receipt.description.as_deref(),
                    receipt.issue_date.to_string(),
                    receipt.user_id.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

            let detail = NumberedDetail {
                customer_id: receipt.customer_id.clone(),
                number: receipt.receipt_number.clone(),
            };
            self.record_audit(
                &tx,
                EntityType::Receipt,
                &receipt.id,
                AuditAction::Created,
                Some(to_json(&detail)?),
            )
            .await?;
            Ok::<_, DatabaseError>(receipt)
        }
        .await;
        finish(tx, result).await
    }

    /// A customer's receipts, newest first, optionally of one type.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_receipts(
        &self,
        customer_id: &str,
        receipt_type: Option<ReceiptType>,
    ) -> Result<Vec<Receipt>, DatabaseError> {
        let mut rows = match receipt_type {
            Some(kind) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {RECEIPT_COLUMNS} FROM receipts
                             WHERE customer_id = ?1 AND type = ?2
                             ORDER BY created_at DESC, rowid DESC"
                        ),
                        libsql::params![customer_id, kind.as_str()],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {RECEIPT_COLUMNS} FROM receipts WHERE customer_id = ?1
                             ORDER BY created_at DESC, rowid DESC"
                        ),
                        [customer_id],
                    )
                    .await?
            }
        };

        let mut receipts = Vec::new();
        while let Some(row) = rows.next().await? {
            receipts.push(row_to_receipt(&row)?);
        }
        Ok(receipts)
    }

    /// Fetch one receipt.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no receipt has this id.
    pub async fn get_receipt(&self, id: &str) -> Result<Receipt, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {RECEIPT_COLUMNS} FROM receipts WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "receipt",
            id: id.to_string(),
        })?;
        row_to_receipt(&row)
    }

    /// Correct a receipt's type, amount, description, or date. The receipt
    /// number is kept.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a negative or non-finite
    /// amount, or `DatabaseError::NotFound` if the receipt does not exist.
    pub async fn update_receipt(
        &self,
        receipt_id: &str,
        update: ReceiptUpdate,
    ) -> Result<Receipt, DatabaseError> {
        let result = self.update_receipt_inner(receipt_id, update).await;
        self.report(
            result,
            |r| format!("Receipt {} updated", r.receipt_number),
            "Failed to update receipt",
            |r| vec![StaleQuery::Receipts(r.customer_id.clone())],
        )
    }

    async fn update_receipt_inner(
        &self,
        receipt_id: &str,
        update: ReceiptUpdate,
    ) -> Result<Receipt, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(kind) = update.receipt_type {
            sets.push(format!("type = ?{idx}"));
            params.push(kind.as_str().into());
            idx += 1;
        }
        if let Some(ref sub_type) = update.sub_type {
            sets.push(format!("sub_type = ?{idx}"));
            params.push(non_blank(sub_type.as_deref()).into());
            idx += 1;
        }
        if let Some(amount) = update.amount {
            validate_amount(amount)?;
            sets.push(format!("amount = ?{idx}"));
            params.push(amount.into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(non_blank(description.as_deref()).into());
            idx += 1;
        }
        if let Some(date) = update.issue_date {
            sets.push(format!("issue_date = ?{idx}"));
            params.push(date.to_string().into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_receipt(receipt_id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(receipt_id.into());
        let sql = format!("UPDATE receipts SET {} WHERE id = ?{idx}", sets.join(", "));

        let tx = self.db().conn().transaction().await?;
        let result = async {
            let changed = tx.execute(&sql, libsql::params_from_iter(params)).await?;
            if changed == 0 {
                return Err(DatabaseError::NotFound {
                    entity: "receipt",
                    id: receipt_id.to_string(),
                });
            }
            self.record_audit(
                &tx,
                EntityType::Receipt,
                receipt_id,
                AuditAction::Updated,
                Some(to_json(&update)?),
            )
            .await
        }
        .await;
        finish(tx, result).await?;

        self.get_receipt(receipt_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{create_named, test_service};
    use crate::updates::receipt::ReceiptUpdateBuilder;
    use chrono::NaiveDate;

    fn accounting(amount: f64) -> NewReceipt {
        NewReceipt {
            receipt_type: ReceiptType::Contabilidade,
            sub_type: Some("avença".into()),
            amount,
            description: None,
            issue_date: None,
        }
    }

    #[tokio::test]
    async fn numbers_continue_within_the_day() {
        let (svc, _) = test_service().await;
        let maria = create_named(&svc, "Maria").await;
        let joao = create_named(&svc, "João").await;
        let today = Utc::now().date_naive().format("%Y%m%d").to_string();

        let first = svc.create_receipt(&maria.id, &accounting(100.0)).await.unwrap();
        let second = svc.create_receipt(&joao.id, &accounting(50.0)).await.unwrap();

        assert_eq!(first.receipt_number, format!("REC-{today}-001"));
        assert_eq!(second.receipt_number, format!("REC-{today}-002"));
        assert_eq!(first.issue_date, Utc::now().date_naive());
    }

    #[tokio::test]
    async fn list_filters_by_type() {
        let (svc, _) = test_service().await;
        let maria = create_named(&svc, "Maria").await;
        svc.create_receipt(&maria.id, &accounting(100.0)).await.unwrap();
        svc.create_receipt(
            &maria.id,
            &NewReceipt {
                receipt_type: ReceiptType::Seguro,
                ..accounting(35.5)
            },
        )
        .await
        .unwrap();

        assert_eq!(svc.list_receipts(&maria.id, None).await.unwrap().len(), 2);
        let insurance = svc
            .list_receipts(&maria.id, Some(ReceiptType::Seguro))
            .await
            .unwrap();
        assert_eq!(insurance.len(), 1);
        assert!((insurance[0].amount - 35.5).abs() < f64::EPSILON);
        assert_eq!(insurance[0].sub_type.as_deref(), Some("avença"));
    }

    #[tokio::test]
    async fn negative_amount_is_rejected() {
        let (svc, _) = test_service().await;
        let maria = create_named(&svc, "Maria").await;
        let err = svc
            .create_receipt(&maria.id, &accounting(-1.0))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(svc.list_receipts(&maria.id, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_corrects_fields_and_keeps_number() {
        let (svc, notifier) = test_service().await;
        let maria = create_named(&svc, "Maria").await;
        let receipt = svc.create_receipt(&maria.id, &accounting(100.0)).await.unwrap();

        let update = ReceiptUpdateBuilder::new()
            .receipt_type(ReceiptType::Seguro)
            .amount(120.0)
            .sub_type(None)
            .description(Some("Seguro habitação".into()))
            .issue_date(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap())
            .build();
        let updated = svc.update_receipt(&receipt.id, update).await.unwrap();

        assert_eq!(updated.receipt_number, receipt.receipt_number);
        assert_eq!(updated.receipt_type, ReceiptType::Seguro);
        assert!((updated.amount - 120.0).abs() < f64::EPSILON);
        assert_eq!(updated.sub_type, None);
        assert_eq!(updated.description.as_deref(), Some("Seguro habitação"));
        assert_eq!(updated.issue_date, NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
        assert!(updated.updated_at >= receipt.updated_at);
        assert_eq!(
            notifier.last_notice().unwrap().message,
            format!("Receipt {} updated", receipt.receipt_number)
        );
    }

    #[tokio::test]
    async fn update_rejects_negative_amount_and_unknown_id() {
        let (svc, _) = test_service().await;
        let maria = create_named(&svc, "Maria").await;
        let receipt = svc.create_receipt(&maria.id, &accounting(100.0)).await.unwrap();

        let err = svc
            .update_receipt(&receipt.id, ReceiptUpdateBuilder::new().amount(-5.0).build())
            .await
            .unwrap_err();
        assert!(err.is_validation());
        let unchanged = svc.get_receipt(&receipt.id).await.unwrap();
        assert!((unchanged.amount - 100.0).abs() < f64::EPSILON);

        let err = svc
            .update_receipt("rec-missing", ReceiptUpdateBuilder::new().amount(1.0).build())
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { entity: "receipt", .. }));
    }

    #[tokio::test]
    async fn receipt_for_missing_customer_is_not_found() {
        let (svc, _) = test_service().await;
        let err = svc
            .create_receipt("cus-missing", &accounting(10.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }
}
