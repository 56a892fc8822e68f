//! CLI response types returned as JSON by `maiato` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Customer, FamilyLink, FamilyLinkPair};
use crate::enums::RelationshipKind;

/// Response from `maiato family add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewRelativeResponse {
    pub customer: Customer,
    pub links: FamilyLinkPair,
}

/// Response from `maiato family unlink`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UnlinkResponse {
    pub link_id: String,
    pub rows_removed: u64,
}

/// Response from `maiato family list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FamilyListResponse {
    pub customer_id: String,
    pub members: Vec<FamilyLink>,
}

/// Response from `maiato family reciprocal`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReciprocalResponse {
    pub relationship: String,
    pub reciprocal: RelationshipKind,
    pub label: String,
}
