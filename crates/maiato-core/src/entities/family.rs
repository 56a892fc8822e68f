use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RelationshipKind;

/// One directed family relationship, stated from `customer_id`'s perspective.
///
/// Rows are created and removed in mirrored pairs and never edited in place.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FamilyLink {
    pub id: String,
    /// Owner of the edge.
    pub customer_id: String,
    pub related_customer_id: String,
    /// What `related_customer_id` is to `customer_id`.
    pub relationship: RelationshipKind,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// The two rows written by a single link operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FamilyLinkPair {
    /// Owner → related, with the chosen relationship.
    pub forward: FamilyLink,
    /// Related → owner, with the reciprocal relationship.
    pub reverse: FamilyLink,
}

impl FamilyLinkPair {
    /// Whether the two rows mirror each other.
    #[must_use]
    pub fn is_mirrored(&self) -> bool {
        self.forward.customer_id == self.reverse.related_customer_id
            && self.forward.related_customer_id == self.reverse.customer_id
            && self.forward.relationship.reciprocal() == self.reverse.relationship
    }
}
