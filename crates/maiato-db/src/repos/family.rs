//! Family link repository: the two-sided relationship linker.
//!
//! A relationship between two customers is stored as a pair of directed rows
//! in `family_members`, each stating it from its owner's perspective:
//! `(A -> B, kind)` and `(B -> A, kind.reciprocal())`. Both linker flows write
//! the pair with one statement inside a transaction, so either both rows
//! exist or neither does. Unlinking removes the named row and its mirror.

use chrono::{DateTime, Utc};

use maiato_core::audit_detail::{LinkedDetail, UnlinkedDetail};
use maiato_core::entities::{Customer, FamilyLink, FamilyLinkPair, NewCustomer};
use maiato_core::enums::{AuditAction, EntityType, RelationshipKind};
use maiato_core::ids::PREFIX_FAMILY_LINK;
use maiato_core::responses::{NewRelativeResponse, UnlinkResponse};

use crate::error::DatabaseError;
use crate::generate_id_on;
use crate::helpers::{parse_datetime, parse_enum, require_non_blank, to_json};
use crate::notify::StaleQuery;
use crate::repos::customer::{customer_name_on, insert_customer_on, validate_new_customer};
use crate::service::{MaiatoService, finish};

fn row_to_link(row: &libsql::Row) -> Result<FamilyLink, DatabaseError> {
    Ok(FamilyLink {
        id: row.get::<String>(0)?,
        customer_id: row.get::<String>(1)?,
        related_customer_id: row.get::<String>(2)?,
        relationship: parse_enum(&row.get::<String>(3)?)?,
        display_name: row.get::<String>(4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

async fn get_link_on(conn: &libsql::Connection, id: &str) -> Result<FamilyLink, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id, customer_id, customer_ref_id, relationship, name, created_at
             FROM family_members WHERE id = ?1",
            [id],
        )
        .await?;
    let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
        entity: "family link",
        id: id.to_string(),
    })?;
    row_to_link(&row)
}

/// Insert both directed rows of a relationship in one statement.
///
/// `display_name` is stored on both rows.
async fn insert_pair_on(
    conn: &libsql::Connection,
    owner_id: &str,
    related_id: &str,
    kind: RelationshipKind,
    display_name: &str,
    now: DateTime<Utc>,
) -> Result<FamilyLinkPair, DatabaseError> {
    let reciprocal = kind.reciprocal();
    let forward_id = generate_id_on(conn, PREFIX_FAMILY_LINK).await?;
    let reverse_id = generate_id_on(conn, PREFIX_FAMILY_LINK).await?;

    conn.execute(
        "INSERT INTO family_members (id, customer_id, customer_ref_id, name, relationship, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6), (?7, ?3, ?2, ?4, ?8, ?6)",
        libsql::params![
            forward_id.as_str(),
            owner_id,
            related_id,
            display_name,
            kind.as_str(),
            now.to_rfc3339(),
            reverse_id.as_str(),
            reciprocal.as_str()
        ],
    )
    .await?;

    Ok(FamilyLinkPair {
        forward: FamilyLink {
            id: forward_id,
            customer_id: owner_id.to_string(),
            related_customer_id: related_id.to_string(),
            relationship: kind,
            display_name: display_name.to_string(),
            created_at: now,
        },
        reverse: FamilyLink {
            id: reverse_id,
            customer_id: related_id.to_string(),
            related_customer_id: owner_id.to_string(),
            relationship: reciprocal,
            display_name: display_name.to_string(),
            created_at: now,
        },
    })
}

fn linked_detail(pair: &FamilyLinkPair) -> LinkedDetail {
    LinkedDetail {
        customer_id: pair.forward.customer_id.clone(),
        related_customer_id: pair.forward.related_customer_id.clone(),
        relationship: pair.forward.relationship.as_str().to_string(),
        reciprocal: pair.reverse.relationship.as_str().to_string(),
        reverse_link_id: pair.reverse.id.clone(),
    }
}

impl MaiatoService {
    /// Create a new customer and link them to `owner_id`.
    ///
    /// `kind` is the relationship from the owner's perspective: with
    /// [`RelationshipKind::Parent`] the new person is the owner's parent and the
    /// owner is recorded as their child. The customer insert, both link rows,
    /// and the audit entries commit together; if any of them fails nothing is
    /// left behind.
    ///
    /// Calling this twice with the same input creates two customers.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if the owner id or the new person's
    /// name is blank, or a persistence error (e.g. the owner does not exist).
    pub async fn link_new_relative(
        &self,
        owner_id: &str,
        relative: &NewCustomer,
        kind: RelationshipKind,
    ) -> Result<NewRelativeResponse, DatabaseError> {
        let result = self.link_new_relative_inner(owner_id, relative, kind).await;
        self.report(
            result,
            |r| format!("{} added as family member", r.customer.name),
            "Failed to add family member",
            |_| {
                vec![
                    StaleQuery::FamilyMembers(owner_id.to_string()),
                    StaleQuery::Customers,
                ]
            },
        )
    }

    async fn link_new_relative_inner(
        &self,
        owner_id: &str,
        relative: &NewCustomer,
        kind: RelationshipKind,
    ) -> Result<NewRelativeResponse, DatabaseError> {
        let owner_id = require_non_blank(owner_id, "owner customer")?;
        validate_new_customer(relative)?;

        let now = Utc::now();
        let tx = self.db().conn().transaction().await?;
        let result = async {
            let customer: Customer =
                insert_customer_on(&tx, relative, self.user_id(), now).await?;
            self.record_audit(
                &tx,
                EntityType::Customer,
                &customer.id,
                AuditAction::Created,
                None,
            )
            .await?;

            let links = insert_pair_on(&tx, owner_id, &customer.id, kind, &customer.name, now).await?;
            self.record_audit(
                &tx,
                EntityType::FamilyLink,
                &links.forward.id,
                AuditAction::Linked,
                Some(to_json(&linked_detail(&links))?),
            )
            .await?;

            Ok::<_, DatabaseError>(NewRelativeResponse { customer, links })
        }
        .await;
        let response = finish(tx, result).await?;

        tracing::info!(
            owner_id,
            related_id = %response.customer.id,
            relationship = %kind,
            "new relative linked"
        );
        Ok(response)
    }

    /// Link two existing customers.
    ///
    /// The target's current name is stored as the display name on both rows;
    /// a missing target yields an empty name and then fails on the foreign key.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if either id is blank or both ids
    /// are the same, or a persistence error.
    pub async fn link_existing_customer(
        &self,
        owner_id: &str,
        target_id: &str,
        kind: RelationshipKind,
    ) -> Result<FamilyLinkPair, DatabaseError> {
        let result = self
            .link_existing_customer_inner(owner_id, target_id, kind)
            .await;
        self.report(
            result,
            |pair| {
                if pair.forward.display_name.is_empty() {
                    "Family member linked".to_string()
                } else {
                    format!("{} linked as family member", pair.forward.display_name)
                }
            },
            "Failed to link family member",
            |pair| {
                vec![
                    StaleQuery::FamilyMembers(pair.forward.customer_id.clone()),
                    StaleQuery::FamilyMembers(pair.forward.related_customer_id.clone()),
                ]
            },
        )
    }

    async fn link_existing_customer_inner(
        &self,
        owner_id: &str,
        target_id: &str,
        kind: RelationshipKind,
    ) -> Result<FamilyLinkPair, DatabaseError> {
        let owner_id = require_non_blank(owner_id, "owner customer")?;
        let target_id = require_non_blank(target_id, "customer to link")?;
        if owner_id == target_id {
            return Err(DatabaseError::Validation(
                "a customer cannot be linked to themselves".into(),
            ));
        }

        let now = Utc::now();
        let tx = self.db().conn().transaction().await?;
        let result = async {
            let display_name = customer_name_on(&tx, target_id).await?.unwrap_or_default();
            let pair = insert_pair_on(&tx, owner_id, target_id, kind, &display_name, now).await?;
            self.record_audit(
                &tx,
                EntityType::FamilyLink,
                &pair.forward.id,
                AuditAction::Linked,
                Some(to_json(&linked_detail(&pair))?),
            )
            .await?;
            Ok::<_, DatabaseError>(pair)
        }
        .await;
        let pair = finish(tx, result).await?;

        tracing::info!(
            owner_id,
            related_id = target_id,
            relationship = %kind,
            "existing customer linked"
        );
        Ok(pair)
    }

    /// Remove a relationship given the id of either of its rows.
    ///
    /// Deletes the named row together with every row pointing the opposite way
    /// between the same two customers. When the mirror row is already gone
    /// only the named row is removed, and that is not an error.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has this id.
    pub async fn unlink_family_member(&self, link_id: &str) -> Result<UnlinkResponse, DatabaseError> {
        let result = self.unlink_family_member_inner(link_id).await;
        self.report(
            result,
            |(_, response)| format!("Family member removed ({} rows)", response.rows_removed),
            "Failed to remove family member",
            |(link, _)| {
                vec![
                    StaleQuery::FamilyMembers(link.customer_id.clone()),
                    StaleQuery::FamilyMembers(link.related_customer_id.clone()),
                ]
            },
        )
        .map(|(_, response)| response)
    }

    async fn unlink_family_member_inner(
        &self,
        link_id: &str,
    ) -> Result<(FamilyLink, UnlinkResponse), DatabaseError> {
        let link_id = require_non_blank(link_id, "family link")?;

        let tx = self.db().conn().transaction().await?;
        let result = async {
            let link = get_link_on(&tx, link_id).await?;
            let rows_removed = tx
                .execute(
                    "DELETE FROM family_members
                     WHERE id = ?1 OR (customer_id = ?2 AND customer_ref_id = ?3)",
                    libsql::params![
                        link_id,
                        link.related_customer_id.as_str(),
                        link.customer_id.as_str()
                    ],
                )
                .await?;

            let detail = UnlinkedDetail {
                customer_id: link.customer_id.clone(),
                related_customer_id: link.related_customer_id.clone(),
                relationship: link.relationship.as_str().to_string(),
                rows_removed,
            };
            self.record_audit(
                &tx,
                EntityType::FamilyLink,
                link_id,
                AuditAction::Unlinked,
                Some(to_json(&detail)?),
            )
            .await?;
            Ok::<_, DatabaseError>((link, rows_removed))
        }
        .await;
        let (link, rows_removed) = finish(tx, result).await?;

        if rows_removed < 2 {
            tracing::warn!(
                link_id,
                owner_id = %link.customer_id,
                related_id = %link.related_customer_id,
                "mirror link was already missing; removed one row"
            );
        } else {
            tracing::info!(link_id, rows_removed, "family link removed");
        }

        let response = UnlinkResponse {
            link_id: link_id.to_string(),
            rows_removed,
        };
        Ok((link, response))
    }

    /// Fetch one family link row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has this id.
    pub async fn get_family_link(&self, id: &str) -> Result<FamilyLink, DatabaseError> {
        get_link_on(self.db().conn(), id).await
    }

    /// Family members of a customer, newest first.
    ///
    /// The display name is the related customer's current name, falling back
    /// to the name stored on the link.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_family_members(
        &self,
        customer_id: &str,
    ) -> Result<Vec<FamilyLink>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT fm.id, fm.customer_id, fm.customer_ref_id, fm.relationship,
                        COALESCE(NULLIF(c.name, ''), fm.name), fm.created_at
                 FROM family_members fm
                 LEFT JOIN customers c ON c.id = fm.customer_ref_id
                 WHERE fm.customer_id = ?1
                 ORDER BY fm.created_at DESC, fm.rowid DESC",
                [customer_id],
            )
            .await?;

        let mut links = Vec::new();
        while let Some(row) = rows.next().await? {
            links.push(row_to_link(&row)?);
        }
        Ok(links)
    }
}
