//! Customer repository: CRUD, search, and link-candidate listing.

use chrono::{DateTime, Utc};

use maiato_core::entities::{Customer, CustomerSummary, NewCustomer};
use maiato_core::enums::{AuditAction, EntityType};
use maiato_core::ids::PREFIX_CUSTOMER;

use crate::error::DatabaseError;
use crate::generate_id_on;
use crate::helpers::{get_opt_string, non_blank, parse_datetime, require_non_blank, to_json};
use crate::notify::StaleQuery;
use crate::service::{MaiatoService, finish};
use crate::updates::customer::CustomerUpdate;

const CUSTOMER_COLUMNS: &str =
    "id, name, email, phone, nif, address, notes, user_id, created_at, updated_at";

fn row_to_customer(row: &libsql::Row) -> Result<Customer, DatabaseError> {
    Ok(Customer {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        email: get_opt_string(row, 2)?,
        phone: get_opt_string(row, 3)?,
        nif: get_opt_string(row, 4)?,
        address: get_opt_string(row, 5)?,
        notes: get_opt_string(row, 6)?,
        user_id: row.get::<String>(7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

/// Reject a new customer without a name. Issues no statement.
pub(crate) fn validate_new_customer(new: &NewCustomer) -> Result<(), DatabaseError> {
    require_non_blank(&new.name, "name")?;
    Ok(())
}

/// Insert a customer on `conn`, which may be an open transaction.
///
/// Text fields are trimmed; blank optional fields are stored as NULL.
pub(crate) async fn insert_customer_on(
    conn: &libsql::Connection,
    new: &NewCustomer,
    user_id: &str,
    now: DateTime<Utc>,
) -> Result<Customer, DatabaseError> {
    let name = require_non_blank(&new.name, "name")?;
    let id = generate_id_on(conn, PREFIX_CUSTOMER).await?;

    let customer = Customer {
        id,
        name: name.to_string(),
        email: non_blank(new.email.as_deref()).map(String::from),
        phone: non_blank(new.phone.as_deref()).map(String::from),
        nif: non_blank(new.nif.as_deref()).map(String::from),
        address: non_blank(new.address.as_deref()).map(String::from),
        notes: non_blank(new.notes.as_deref()).map(String::from),
        user_id: user_id.to_string(),
        created_at: now,
        updated_at: now,
    };

    conn.execute(
        "INSERT INTO customers (id, name, email, phone, nif, address, notes, user_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        libsql::params![
            customer.id.as_str(),
            customer.name.as_str(),
            customer.email.as_deref(),
            customer.phone.as_deref(),
            customer.nif.as_deref(),
            customer.address.as_deref(),
            customer.notes.as_deref(),
            customer.user_id.as_str(),
            now.to_rfc3339(),
            now.to_rfc3339()
        ],
    )
    .await?;

    Ok(customer)
}

/// Name of a customer, or `None` when no such customer exists.
pub(crate) async fn customer_name_on(
    conn: &libsql::Connection,
    id: &str,
) -> Result<Option<String>, DatabaseError> {
    let mut rows = conn
        .query("SELECT name FROM customers WHERE id = ?1", [id])
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row.get::<String>(0)?)),
        None => Ok(None),
    }
}

impl MaiatoService {
    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if the name is blank, or any
    /// persistence error from the insert.
    pub async fn create_customer(&self, new: &NewCustomer) -> Result<Customer, DatabaseError> {
        let result = self.create_customer_inner(new).await;
        self.report(
            result,
            |c| format!("Customer {} created", c.name),
            "Failed to create customer",
            |_| vec![StaleQuery::Customers],
        )
    }

    async fn create_customer_inner(&self, new: &NewCustomer) -> Result<Customer, DatabaseError> {
        validate_new_customer(new)?;
        let tx = self.db().conn().transaction().await?;
        let result = async {
            let customer = insert_customer_on(&tx, new, self.user_id(), Utc::now()).await?;
            self.record_audit(
                &tx,
                EntityType::Customer,
                &customer.id,
                AuditAction::Created,
                None,
            )
            .await?;
            Ok::<_, DatabaseError>(customer)
        }
        .await;
        finish(tx, result).await
    }

    /// Fetch one customer.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no customer has this id.
    pub async fn get_customer(&self, id: &str) -> Result<Customer, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "customer",
            id: id.to_string(),
        })?;
        row_to_customer(&row)
    }

    /// Most recently created customers first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_customers(&self, limit: u32) -> Result<Vec<Customer>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {CUSTOMER_COLUMNS} FROM customers
                     ORDER BY created_at DESC, rowid DESC LIMIT ?1"
                ),
                [limit],
            )
            .await?;

        let mut customers = Vec::new();
        while let Some(row) = rows.next().await? {
            customers.push(row_to_customer(&row)?);
        }
        Ok(customers)
    }

    /// Customers matching `query` by name or NIF, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn search_customers(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Customer>, DatabaseError> {
        let pattern = format!("%{}%", query.trim());
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {CUSTOMER_COLUMNS} FROM customers
                     WHERE name LIKE ?1 OR nif LIKE ?1
                     ORDER BY name LIMIT ?2"
                ),
                libsql::params![pattern, limit],
            )
            .await?;

        let mut customers = Vec::new();
        while let Some(row) = rows.next().await? {
            customers.push(row_to_customer(&row)?);
        }
        Ok(customers)
    }

    /// Every customer except `exclude_id`, ordered by name.
    ///
    /// This is the candidate list offered when linking an existing customer.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_link_candidates(
        &self,
        exclude_id: &str,
    ) -> Result<Vec<CustomerSummary>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name FROM customers WHERE id != ?1 ORDER BY name",
                [exclude_id],
            )
            .await?;

        let mut candidates = Vec::new();
        while let Some(row) = rows.next().await? {
            candidates.push(CustomerSummary {
                id: row.get::<String>(0)?,
                name: row.get::<String>(1)?,
            });
        }
        Ok(candidates)
    }

    /// Apply a partial update. An empty update returns the stored customer.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if the new name is blank, or
    /// `DatabaseError::NotFound` if the customer does not exist.
    pub async fn update_customer(
        &self,
        customer_id: &str,
        update: CustomerUpdate,
    ) -> Result<Customer, DatabaseError> {
        let result = self.update_customer_inner(customer_id, update).await;
        self.report(
            result,
            |c| format!("Customer {} updated", c.name),
            "Failed to update customer",
            |c| vec![StaleQuery::Customers, StaleQuery::Customer(c.id.clone())],
        )
    }

    async fn update_customer_inner(
        &self,
        customer_id: &str,
        update: CustomerUpdate,
    ) -> Result<Customer, DatabaseError> {
        if let Some(ref name) = update.name {
            require_non_blank(name, "name")?;
        }
        if update.is_empty() {
            return self.get_customer(customer_id).await;
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.trim().into());
            idx += 1;
        }
        let optional = [
            ("email", &update.email),
            ("phone", &update.phone),
            ("nif", &update.nif),
            ("address", &update.address),
            ("notes", &update.notes),
        ];
        for (column, value) in optional {
            if let Some(value) = value {
                sets.push(format!("{column} = ?{idx}"));
                params.push(non_blank(value.as_deref()).into());
                idx += 1;
            }
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(customer_id.into());
        let sql = format!(
            "UPDATE customers SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );

        let tx = self.db().conn().transaction().await?;
        let result = async {
            let changed = tx.execute(&sql, libsql::params_from_iter(params)).await?;
            if changed == 0 {
                return Err(DatabaseError::NotFound {
                    entity: "customer",
                    id: customer_id.to_string(),
                });
            }
            self.record_audit(
                &tx,
                EntityType::Customer,
                customer_id,
                AuditAction::Updated,
                Some(to_json(&update)?),
            )
            .await
        }
        .await;
        finish(tx, result).await?;

        self.get_customer(customer_id).await
    }

    /// Delete a customer. Their family links, on either side, go with them,
    /// as do their historial entries, receipts, and reminders.
    ///
    /// Returns the deleted customer.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the customer does not exist.
    pub async fn delete_customer(&self, customer_id: &str) -> Result<Customer, DatabaseError> {
        let result = self.delete_customer_inner(customer_id).await;
        self.report(
            result,
            |(c, _)| format!("Customer {} deleted", c.name),
            "Failed to delete customer",
            |(c, related)| {
                let mut stale = vec![
                    StaleQuery::Customers,
                    StaleQuery::Customer(c.id.clone()),
                    StaleQuery::FamilyMembers(c.id.clone()),
                    StaleQuery::Historial(c.id.clone()),
                    StaleQuery::Receipts(c.id.clone()),
                    StaleQuery::Reminders(c.id.clone()),
                ];
                stale.extend(related.iter().cloned().map(StaleQuery::FamilyMembers));
                stale
            },
        )
        .map(|(customer, _)| customer)
    }

    async fn delete_customer_inner(
        &self,
        customer_id: &str,
    ) -> Result<(Customer, Vec<String>), DatabaseError> {
        let customer = self.get_customer(customer_id).await?;

        let tx = self.db().conn().transaction().await?;
        let result = async {
            let mut rows = tx
                .query(
                    "SELECT DISTINCT customer_id FROM family_members WHERE customer_ref_id = ?1",
                    [customer_id],
                )
                .await?;
            let mut related = Vec::new();
            while let Some(row) = rows.next().await? {
                related.push(row.get::<String>(0)?);
            }

            tx.execute("DELETE FROM customers WHERE id = ?1", [customer_id])
                .await?;
            self.record_audit(
                &tx,
                EntityType::Customer,
                customer_id,
                AuditAction::Deleted,
                Some(to_json(&customer)?),
            )
            .await?;
            Ok::<_, DatabaseError>(related)
        }
        .await;
        let related = finish(tx, result).await?;

        tracing::info!(customer_id, related = related.len(), "customer deleted");
        Ok((customer, related))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::audit::AuditFilter;
    use crate::test_support::helpers::{create_named, test_service};
    use crate::updates::customer::CustomerUpdateBuilder;

    #[tokio::test]
    async fn create_customer_roundtrip() {
        let (svc, notifier) = test_service().await;
        let new = NewCustomer {
            email: Some("  maria@example.pt ".into()),
            phone: Some("   ".into()),
            nif: Some("123456789".into()),
            ..NewCustomer::named("  Maria  ")
        };

        let customer = svc.create_customer(&new).await.unwrap();
        assert!(customer.id.starts_with("cus-"));
        assert_eq!(customer.name, "Maria");
        assert_eq!(customer.email.as_deref(), Some("maria@example.pt"));
        assert_eq!(customer.phone, None);
        assert_eq!(customer.user_id, svc.user_id());

        let fetched = svc.get_customer(&customer.id).await.unwrap();
        assert_eq!(fetched, customer);

        assert!(notifier.stale().contains(&StaleQuery::Customers));
        assert_eq!(
            notifier.last_notice().unwrap().message,
            "Customer Maria created"
        );
    }

    #[tokio::test]
    async fn blank_name_is_rejected_before_insert() {
        let (svc, notifier) = test_service().await;
        let err = svc
            .create_customer(&NewCustomer::named("   "))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(svc.list_customers(10).await.unwrap().is_empty());
        assert!(notifier.last_notice().unwrap().message.contains("name is required"));
    }

    #[tokio::test]
    async fn get_missing_customer_is_not_found() {
        let (svc, _) = test_service().await;
        let err = svc.get_customer("cus-missing").await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { entity: "customer", .. }));
    }

    #[tokio::test]
    async fn candidates_exclude_owner_and_sort_by_name() {
        let (svc, _) = test_service().await;
        let maria = create_named(&svc, "Maria").await;
        create_named(&svc, "Pedro").await;
        create_named(&svc, "Ana").await;

        let names: Vec<String> = svc
            .list_link_candidates(&maria.id)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Ana", "Pedro"]);
    }

    #[tokio::test]
    async fn search_matches_name_and_nif() {
        let (svc, _) = test_service().await;
        svc.create_customer(&NewCustomer {
            nif: Some("500100200".into()),
            ..NewCustomer::named("Maria Silva")
        })
        .await
        .unwrap();
        create_named(&svc, "João Costa").await;

        assert_eq!(svc.search_customers("silva", 10).await.unwrap().len(), 1);
        assert_eq!(svc.search_customers("500100", 10).await.unwrap().len(), 1);
        assert!(svc.search_customers("nobody", 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let (svc, _) = test_service().await;
        let customer = svc
            .create_customer(&NewCustomer {
                email: Some("old@example.pt".into()),
                phone: Some("910000000".into()),
                ..NewCustomer::named("Maria")
            })
            .await
            .unwrap();

        let update = CustomerUpdateBuilder::new()
            .name("Maria Silva")
            .email(None)
            .build();
        let updated = svc.update_customer(&customer.id, update).await.unwrap();

        assert_eq!(updated.name, "Maria Silva");
        assert_eq!(updated.email, None);
        assert_eq!(updated.phone.as_deref(), Some("910000000"));
        assert!(updated.updated_at >= customer.updated_at);

        let audit = svc
            .query_audit(&AuditFilter {
                entity_id: Some(customer.id.clone()),
                action: Some(AuditAction::Updated),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(
            audit[0].detail,
            Some(serde_json::json!({"name": "Maria Silva", "email": null}))
        );
    }

    #[tokio::test]
    async fn update_missing_customer_is_not_found() {
        let (svc, _) = test_service().await;
        let update = CustomerUpdateBuilder::new().name("X").build();
        let err = svc.update_customer("cus-missing", update).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_removes_customer_and_audits() {
        let (svc, _) = test_service().await;
        let customer = create_named(&svc, "Maria").await;

        let deleted = svc.delete_customer(&customer.id).await.unwrap();
        assert_eq!(deleted.id, customer.id);
        assert!(svc.get_customer(&customer.id).await.is_err());

        let audit = svc
            .query_audit(&AuditFilter {
                entity_id: Some(customer.id),
                action: Some(AuditAction::Deleted),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(audit.len(), 1);
    }
}
