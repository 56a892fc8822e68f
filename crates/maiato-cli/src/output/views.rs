//! Column layouts for each record the CLI prints.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use maiato_core::entities::{
    AuditEntry, Customer, CustomerSummary, FamilyLink, FamilyLinkPair, HistorialEntry, Receipt,
    Reminder,
};
use maiato_core::enums::RelationshipKind;
use maiato_core::responses::{
    FamilyListResponse, NewRelativeResponse, ReciprocalResponse, UnlinkResponse,
};
use serde::Serialize;

use super::table::{self, Cell, TableOptions, Tone};
use super::{Render, Tabular};

fn day(at: &DateTime<Utc>) -> Cell {
    Cell::text(at.format("%Y-%m-%d").to_string())
}

fn stamp(at: &DateTime<Utc>) -> Cell {
    Cell::text(at.format("%Y-%m-%d %H:%M").to_string())
}

fn relationship(kind: RelationshipKind) -> Cell {
    Cell::text(kind.display_label()).tone(Tone::Info)
}

impl Tabular for Customer {
    const COLUMNS: &'static [&'static str] = &["id", "name", "nif", "phone", "email", "created"];

    fn row(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            Cell::text(&self.name),
            Cell::opt(self.nif.as_deref()),
            Cell::opt(self.phone.as_deref()),
            Cell::opt(self.email.as_deref()),
            day(&self.created_at),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, Cell)> {
        vec![
            ("id", Cell::text(&self.id)),
            ("name", Cell::text(&self.name)),
            ("email", Cell::opt(self.email.as_deref())),
            ("phone", Cell::opt(self.phone.as_deref())),
            ("nif", Cell::opt(self.nif.as_deref())),
            ("address", Cell::opt(self.address.as_deref())),
            ("notes", Cell::opt(self.notes.as_deref())),
            ("created", stamp(&self.created_at)),
            ("updated", stamp(&self.updated_at)),
        ]
    }
}

impl Tabular for CustomerSummary {
    const COLUMNS: &'static [&'static str] = &["id", "name"];

    fn row(&self) -> Vec<Cell> {
        vec![Cell::text(&self.id), Cell::text(&self.name)]
    }
}

/// Seen from the owning customer: `relationship` is what the related person is to them.
impl Tabular for FamilyLink {
    const COLUMNS: &'static [&'static str] = &["id", "relationship", "name", "customer", "since"];

    fn row(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            relationship(self.relationship),
            Cell::text(&self.display_name),
            Cell::text(&self.related_customer_id),
            day(&self.created_at),
        ]
    }
}

impl Tabular for HistorialEntry {
    const COLUMNS: &'static [&'static str] =
        &["number", "date", "occurrence", "response", "urgent", "viewed", "id"];

    fn row(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.historial_number),
            Cell::text(self.occurrence_date.format("%Y-%m-%d").to_string()),
            Cell::text(&self.occurrence),
            Cell::opt(self.response.as_deref()),
            urgency(self),
            Cell::flag(self.viewed, "viewed", Tone::Done),
            Cell::text(&self.id),
        ]
    }
}

/// Urgent entries still waiting for a response stand out.
fn urgency(entry: &HistorialEntry) -> Cell {
    let tone = if entry.response.is_some() {
        Tone::Info
    } else {
        Tone::Alert
    };
    Cell::flag(entry.urgent, "urgent", tone)
}

impl Tabular for Receipt {
    const COLUMNS: &'static [&'static str] =
        &["number", "type", "sub_type", "amount", "issued", "description", "id"];

    fn row(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.receipt_number),
            Cell::text(self.receipt_type.as_str()),
            Cell::opt(self.sub_type.as_deref()),
            Cell::amount(self.amount),
            Cell::text(self.issue_date.format("%Y-%m-%d").to_string()),
            Cell::opt(self.description.as_deref()),
            Cell::text(&self.id),
        ]
    }
}

impl Tabular for Reminder {
    const COLUMNS: &'static [&'static str] = &["due", "title", "status", "description", "id"];

    fn row(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.reminder_date.format("%Y-%m-%d %H:%M").to_string()),
            Cell::text(&self.title),
            reminder_status(self, Local::now().naive_local()),
            Cell::opt(self.description.as_deref()),
            Cell::text(&self.id),
        ]
    }
}

fn reminder_status(reminder: &Reminder, now: NaiveDateTime) -> Cell {
    if reminder.completed {
        Cell::text("done").tone(Tone::Done)
    } else if reminder.reminder_date < now {
        Cell::text("overdue").tone(Tone::Alert)
    } else {
        Cell::text("open")
    }
}

impl Tabular for AuditEntry {
    const COLUMNS: &'static [&'static str] = &["when", "action", "entity", "entity_id", "user"];

    fn row(&self) -> Vec<Cell> {
        vec![
            stamp(&self.created_at),
            Cell::text(self.action.as_str()),
            Cell::text(self.entity_type.as_str()),
            Cell::text(&self.entity_id),
            Cell::opt(self.user_id.as_deref()),
        ]
    }
}

render_as_record!(Customer, FamilyLink, HistorialEntry, Receipt, Reminder);

/// Both rows of a link, labelled by owner.
fn pair_table(pair: &FamilyLinkPair, options: TableOptions) -> String {
    let rows = [&pair.forward, &pair.reverse]
        .into_iter()
        .map(|link| {
            vec![
                Cell::text(&link.id),
                Cell::text(&link.customer_id),
                relationship(link.relationship),
                Cell::text(&link.display_name),
            ]
        })
        .collect::<Vec<_>>();
    table::render_rows(&["id", "owner", "relationship", "name"], &rows, options)
}

impl Render for FamilyLinkPair {
    fn table(&self, options: TableOptions) -> String {
        pair_table(self, options)
    }
}

impl Render for NewRelativeResponse {
    fn table(&self, options: TableOptions) -> String {
        format!(
            "{}\n\n{}",
            self.customer.table(options),
            pair_table(&self.links, options)
        )
    }
}

impl Render for UnlinkResponse {
    fn table(&self, options: TableOptions) -> String {
        // A single row means the mirror was already gone.
        let removed = Cell::text(self.rows_removed.to_string());
        let removed = if self.rows_removed < 2 {
            removed.tone(Tone::Alert)
        } else {
            removed
        };
        table::render_record(
            &[("link", Cell::text(&self.link_id)), ("rows_removed", removed)],
            options,
        )
    }
}

impl Render for FamilyListResponse {
    fn table(&self, options: TableOptions) -> String {
        self.members.table(options)
    }
}

impl Render for ReciprocalResponse {
    fn table(&self, options: TableOptions) -> String {
        table::render_record(
            &[
                ("relationship", Cell::text(&self.relationship)),
                ("reciprocal", Cell::text(self.reciprocal.as_str())),
                ("label", relationship(self.reciprocal)),
            ],
            options,
        )
    }
}

/// `customer get`: the customer with their family.
#[derive(Debug, Serialize)]
pub struct CustomerCard {
    pub customer: Customer,
    pub family: Vec<FamilyLink>,
}

impl Render for CustomerCard {
    fn table(&self, options: TableOptions) -> String {
        format!(
            "{}\n\nfamily\n{}",
            self.customer.table(options),
            self.family.table(options)
        )
    }
}

/// Confirmation printed by the delete commands.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: &'static str,
    pub id: String,
    pub label: String,
}

impl Render for Deleted {
    fn table(&self, options: TableOptions) -> String {
        table::render_record(
            &[
                ("deleted", Cell::text(self.deleted)),
                ("id", Cell::text(&self.id)),
                ("label", Cell::text(&self.label)),
            ],
            options,
        )
    }
}
