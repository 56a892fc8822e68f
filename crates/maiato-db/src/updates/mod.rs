//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some` fields
//! generate SET clauses in the dynamic UPDATE SQL. The update struct is also
//! serialized as the audit detail (changed fields only).

pub mod customer;
pub mod historial;
pub mod receipt;
pub mod reminder;
