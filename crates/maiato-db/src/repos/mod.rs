//! Repository modules implementing the operations for all Maiato records.
//!
//! Each module adds methods to `MaiatoService` via `impl MaiatoService` blocks.

pub mod audit;
pub mod customer;
pub mod family;
pub mod historial;
pub mod receipt;
pub mod reminder;

use maiato_core::enums::EntityType;

use crate::error::DatabaseError;
use crate::helpers::entity_type_to_table;

/// Fail with `NotFound` unless a row of `entity` with this id exists.
pub(crate) async fn ensure_exists_on(
    conn: &libsql::Connection,
    entity: EntityType,
    id: &str,
) -> Result<(), DatabaseError> {
    let table = entity_type_to_table(&entity);
    let mut rows = conn
        .query(&format!("SELECT 1 FROM {table} WHERE id = ?1"), [id])
        .await?;
    if rows.next().await?.is_none() {
        return Err(DatabaseError::NotFound {
            entity: entity_label(entity),
            id: id.to_string(),
        });
    }
    Ok(())
}

const fn entity_label(entity: EntityType) -> &'static str {
    match entity {
        EntityType::Customer => "customer",
        EntityType::FamilyLink => "family link",
        EntityType::Historial => "historial entry",
        EntityType::Receipt => "receipt",
        EntityType::Reminder => "reminder",
        EntityType::Audit => "audit entry",
    }
}
