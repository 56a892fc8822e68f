//! # maiato-core
//!
//! Core types, ID prefixes, and error types for Maiato.
//!
//! This crate provides the foundational types shared across all Maiato crates:
//! - Entity structs for the back-office records (customers, family links,
//!   historial entries, receipts, reminders, audit entries)
//! - `RelationshipKind` with its reciprocal mapping
//! - ID prefix constants
//! - Cross-cutting error types
//! - Audit detail sub-types
//! - CLI response types

pub mod audit_detail;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
