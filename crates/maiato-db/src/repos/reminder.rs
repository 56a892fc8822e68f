//! Reminder repository: dated follow-ups per customer.
//!
//! `reminder_date` is a wall-clock time with no zone, stored as
//! `YYYY-MM-DDTHH:MM:SS` so that text order is chronological order.

use chrono::Utc;

use maiato_core::audit_detail::ReminderDetail;
use maiato_core::entities::{NewReminder, Reminder};
use maiato_core::enums::{AuditAction, EntityType};
use maiato_core::ids::PREFIX_REMINDER;

use crate::error::DatabaseError;
use crate::generate_id_on;
use crate::helpers::{
    format_local_datetime, get_bool, get_opt_string, non_blank, parse_datetime,
    parse_local_datetime, require_non_blank, to_json,
};
use crate::notify::StaleQuery;
use crate::repos::ensure_exists_on;
use crate::service::{MaiatoService, finish};
use crate::updates::reminder::ReminderUpdate;

const REMINDER_COLUMNS: &str = "id, customer_id, title, description, reminder_date, completed, \
     user_id, created_at, updated_at";

fn row_to_reminder(row: &libsql::Row) -> Result<Reminder, DatabaseError> {
    Ok(Reminder {
        id: row.get::<String>(0)?,
        customer_id: row.get::<String>(1)?,
        title: row.get::<String>(2)?,
        description: get_opt_string(row, 3)?,
        reminder_date: parse_local_datetime(&row.get::<String>(4)?)?,
        completed: get_bool(row, 5)?,
        user_id: row.get::<String>(6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

fn detail(reminder: &Reminder) -> ReminderDetail {
    ReminderDetail {
        customer_id: reminder.customer_id.clone(),
        title: reminder.title.clone(),
        reminder_date: format_local_datetime(reminder.reminder_date),
    }
}

impl MaiatoService {
    /// Add a reminder for a customer.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if the title is blank, or
    /// `DatabaseError::NotFound` if the customer does not exist.
    pub async fn add_reminder(
        &self,
        customer_id: &str,
        new: &NewReminder,
    ) -> Result<Reminder, DatabaseError> {
        let result = self.add_reminder_inner(customer_id, new).await;
        self.report(
            result,
            |r| format!("Reminder '{}' created", r.title),
            "Failed to create reminder",
            |r| vec![StaleQuery::Reminders(r.customer_id.clone())],
        )
    }

    async fn add_reminder_inner(
        &self,
        customer_id: &str,
        new: &NewReminder,
    ) -> Result<Reminder, DatabaseError> {
        let customer_id = require_non_blank(customer_id, "customer")?;
        let title = require_non_blank(&new.title, "title")?;

        let tx = self.db().conn().transaction().await?;
        let result = async {
            ensure_exists_on(&tx, EntityType::Customer, customer_id).await?;

            let now = Utc::now();
            let reminder = Reminder {
                id: generate_id_on(&tx, PREFIX_REMINDER).await?,
                customer_id: customer_id.to_string(),
                title: title.to_string(),
                description: non_blank(new.description.as_deref()).map(String::from),
                reminder_date: new.reminder_date,
                completed: false,
                user_id: self.user_id().to_string(),
                created_at: now,
                updated_at: now,
            };

            tx.execute(
                "INSERT INTO reminders (id, customer_id, title, description, reminder_date,
                     completed, user_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7, ?7)",
                libsql::params![
                    reminder.id.as_str(),
                    reminder.customer_id.as_str(),
                    reminder.title.as_str(),
                    reminder.description.as_deref(),
                    format_local_datetime(reminder.reminder_date),
                    reminder.user_id.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

            self.record_audit(
                &tx,
                EntityType::Reminder,
                &reminder.id,
                AuditAction::Created,
                Some(to_json(&detail(&reminder))?),
            )
            .await?;
            Ok::<_, DatabaseError>(reminder)
        }
        .await;
        finish(tx, result).await
    }

    /// Fetch one reminder.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no reminder has this id.
    pub async fn get_reminder(&self, id: &str) -> Result<Reminder, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {REMINDER_COLUMNS} FROM reminders WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "reminder",
            id: id.to_string(),
        })?;
        row_to_reminder(&row)
    }

    /// A customer's reminders, soonest first. Completed reminders stay listed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_reminders(&self, customer_id: &str) -> Result<Vec<Reminder>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {REMINDER_COLUMNS} FROM reminders WHERE customer_id = ?1
                     ORDER BY reminder_date ASC, rowid ASC"
                ),
                [customer_id],
            )
            .await?;

        let mut reminders = Vec::new();
        while let Some(row) = rows.next().await? {
            reminders.push(row_to_reminder(&row)?);
        }
        Ok(reminders)
    }

    /// Apply a partial update to a reminder.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if the new title is blank, or
    /// `DatabaseError::NotFound` if the reminder does not exist.
    pub async fn update_reminder(
        &self,
        reminder_id: &str,
        update: ReminderUpdate,
    ) -> Result<Reminder, DatabaseError> {
        let result = self.update_reminder_inner(reminder_id, update).await;
        self.report(
            result,
            |r| {
                if r.completed {
                    format!("Reminder '{}' completed", r.title)
                } else {
                    format!("Reminder '{}' updated", r.title)
                }
            },
            "Failed to update reminder",
            |r| vec![StaleQuery::Reminders(r.customer_id.clone())],
        )
    }

    /// Mark a reminder done, or open again.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the reminder does not exist.
    pub async fn set_reminder_completed(
        &self,
        reminder_id: &str,
        completed: bool,
    ) -> Result<Reminder, DatabaseError> {
        self.update_reminder(
            reminder_id,
            ReminderUpdate {
                completed: Some(completed),
                ..ReminderUpdate::default()
            },
        )
        .await
    }

    async fn update_reminder_inner(
        &self,
        reminder_id: &str,
        update: ReminderUpdate,
    ) -> Result<Reminder, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref title) = update.title {
            let title = require_non_blank(title, "title")?;
            sets.push(format!("title = ?{idx}"));
            params.push(title.into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(non_blank(description.as_deref()).into());
            idx += 1;
        }
        if let Some(date) = update.reminder_date {
            sets.push(format!("reminder_date = ?{idx}"));
            params.push(format_local_datetime(date).into());
            idx += 1;
        }
        if let Some(completed) = update.completed {
            sets.push(format!("completed = ?{idx}"));
            params.push(i64::from(completed).into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_reminder(reminder_id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(reminder_id.into());
        let sql = format!("UPDATE reminders SET {} WHERE id = ?{idx}", sets.join(", "));

        let tx = self.db().conn().transaction().await?;
        let result = async {
            let changed = tx.execute(&sql, libsql::params_from_iter(params)).await?;
            if changed == 0 {
                return Err(DatabaseError::NotFound {
                    entity: "reminder",
                    id: reminder_id.to_string(),
                });
            }
            self.record_audit(
                &tx,
                EntityType::Reminder,
                reminder_id,
                AuditAction::Updated,
                Some(to_json(&update)?),
            )
            .await
        }
        .await;
        finish(tx, result).await?;

        self.get_reminder(reminder_id).await
    }

    /// Delete a reminder, returning it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the reminder does not exist.
    pub async fn delete_reminder(&self, reminder_id: &str) -> Result<Reminder, DatabaseError> {
        let result = self.delete_reminder_inner(reminder_id).await;
        self.report(
            result,
            |r| format!("Reminder '{}' deleted", r.title),
            "Failed to delete reminder",
            |r| vec![StaleQuery::Reminders(r.customer_id.clone())],
        )
    }

    async fn delete_reminder_inner(&self, reminder_id: &str) -> Result<Reminder, DatabaseError> {
        let reminder = self.get_reminder(reminder_id).await?;

        let tx = self.db().conn().transaction().await?;
        let result = async {
            tx.execute("DELETE FROM reminders WHERE id = ?1", [reminder_id])
                .await?;
            self.record_audit(
                &tx,
                EntityType::Reminder,
                reminder_id,
                AuditAction::Deleted,
                Some(to_json(&detail(&reminder))?),
            )
            .await
        }
        .await;
        finish(tx, result).await?;

        Ok(reminder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::audit::AuditFilter;
    use crate::test_support::helpers::{create_named, test_service};
    use crate::updates::reminder::ReminderUpdateBuilder;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn reminder(title: &str, when: NaiveDateTime) -> NewReminder {
        NewReminder {
            title: title.into(),
            description: None,
            reminder_date: when,
        }
    }

    #[tokio::test]
    async fn listed_soonest_first() {
        let (svc, notifier) = test_service().await;
        let maria = create_named(&svc, "Maria").await;

        svc.add_reminder(&maria.id, &reminder("Renovar seguro", at(20, 9)))
            .await
            .unwrap();
        svc.add_reminder(&maria.id, &reminder("Ligar sobre IRS", at(18, 14)))
            .await
            .unwrap();
        svc.add_reminder(&maria.id, &reminder("Enviar recibo", at(18, 9)))
            .await
            .unwrap();

        let titles: Vec<String> = svc
            .list_reminders(&maria.id)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, ["Enviar recibo", "Ligar sobre IRS", "Renovar seguro"]);
        assert_eq!(
            notifier.stale().last(),
            Some(&StaleQuery::Reminders(maria.id.clone()))
        );
    }

    #[tokio::test]
    async fn toggle_completed_both_ways() {
        let (svc, notifier) = test_service().await;
        let maria = create_named(&svc, "Maria").await;
        let created = svc
            .add_reminder(&maria.id, &reminder("Renovar seguro", at(20, 9)))
            .await
            .unwrap();
        assert!(!created.completed);

        let done = svc.set_reminder_completed(&created.id, true).await.unwrap();
        assert!(done.completed);
        assert_eq!(
            notifier.last_notice().unwrap().message,
            "Reminder 'Renovar seguro' completed"
        );

        let reopened = svc.set_reminder_completed(&created.id, false).await.unwrap();
        assert!(!reopened.completed);
        assert_eq!(reopened.reminder_date, at(20, 9));
    }

    #[tokio::test]
    async fn update_changes_title_and_date() {
        let (svc, _) = test_service().await;
        let maria = create_named(&svc, "Maria").await;
        let created = svc
            .add_reminder(&maria.id, &reminder("Ligar", at(18, 9)))
            .await
            .unwrap();

        let update = ReminderUpdateBuilder::new()
            .title("Ligar à Maria")
            .description(Some("Falta o NIB".into()))
            .reminder_date(at(19, 10))
            .build();
        let updated = svc.update_reminder(&created.id, update).await.unwrap();

        assert_eq!(updated.title, "Ligar à Maria");
        assert_eq!(updated.description.as_deref(), Some("Falta o NIB"));
        assert_eq!(updated.reminder_date, at(19, 10));

        let blank = ReminderUpdateBuilder::new().title("  ").build();
        let err = svc.update_reminder(&created.id, blank).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn delete_removes_and_audits() {
        let (svc, _) = test_service().await;
        let maria = create_named(&svc, "Maria").await;
        let created = svc
            .add_reminder(&maria.id, &reminder("Renovar seguro", at(20, 9)))
            .await
            .unwrap();

        let deleted = svc.delete_reminder(&created.id).await.unwrap();
        assert_eq!(deleted.id, created.id);
        assert!(svc.list_reminders(&maria.id).await.unwrap().is_empty());

        let audit = svc
            .query_audit(&AuditFilter {
                entity_type: Some(EntityType::Reminder),
                action: Some(AuditAction::Deleted),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(audit.len(), 1);

        let err = svc.delete_reminder(&created.id).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { entity: "reminder", .. }));
    }

    #[tokio::test]
    async fn blank_title_and_missing_customer_are_rejected() {
        let (svc, notifier) = test_service().await;
        let maria = create_named(&svc, "Maria").await;

        let err = svc
            .add_reminder(&maria.id, &reminder(" ", at(20, 9)))
            .await
            .unwrap_err();
        assert!(err.is_validation());

        let err = svc
            .add_reminder("cus-missing", &reminder("Ligar", at(20, 9)))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { entity: "customer", .. }));
        assert!(
            notifier
                .last_notice()
                .unwrap()
                .message
                .starts_with("Failed to create reminder")
        );
    }

    #[tokio::test]
    async fn reminders_go_with_their_customer() {
        let (svc, _) = test_service().await;
        let maria = create_named(&svc, "Maria").await;
        svc.add_reminder(&maria.id, &reminder("Renovar seguro", at(20, 9)))
            .await
            .unwrap();

        svc.delete_customer(&maria.id).await.unwrap();
        assert!(svc.list_reminders(&maria.id).await.unwrap().is_empty());
    }
}
