//! Relationship kinds, receipt types, entity types, and audit actions.
//!
//! Stored values are the short codes the office has always used in the
//! database (`conjuge`, `pai`, `contabilidade`, ...). `RelationshipKind` also
//! accepts English names as input aliases.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// RelationshipKind
// ---------------------------------------------------------------------------

/// Family relationship from the owner's perspective.
///
/// ```text
/// grandparent (avo)  ↔  grandchild (neto)
/// parent (pai)       ↔  child (filho)
/// spouse (conjuge)   ↔  spouse (conjuge)
/// other (outro)      ↔  other (outro)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RelationshipKind {
    #[serde(rename = "avo", alias = "grandparent")]
    Grandparent,
    #[serde(rename = "pai", alias = "parent")]
    Parent,
    #[serde(rename = "conjuge", alias = "spouse")]
    Spouse,
    #[serde(rename = "filho", alias = "child")]
    Child,
    #[serde(rename = "neto", alias = "grandchild")]
    Grandchild,
    #[serde(rename = "outro", alias = "other")]
    Other,
}

impl RelationshipKind {
    pub const ALL: [Self; 6] = [
        Self::Grandparent,
        Self::Parent,
        Self::Spouse,
        Self::Child,
        Self::Grandchild,
        Self::Other,
    ];

    /// The relationship the related party holds toward the owner.
    #[must_use]
    pub const fn reciprocal(self) -> Self {
        match self {
            Self::Grandparent => Self::Grandchild,
            Self::Grandchild => Self::Grandparent,
            Self::Parent => Self::Child,
            Self::Child => Self::Parent,
            Self::Spouse => Self::Spouse,
            Self::Other => Self::Other,
        }
    }

    /// Reciprocal of a raw stored label. Unrecognised labels map to `Other`.
    #[must_use]
    pub fn reciprocal_label(label: &str) -> Self {
        label.parse::<Self>().map_or(Self::Other, Self::reciprocal)
    }

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grandparent => "avo",
            Self::Parent => "pai",
            Self::Spouse => "conjuge",
            Self::Child => "filho",
            Self::Grandchild => "neto",
            Self::Other => "outro",
        }
    }

    /// Label shown to office staff.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Grandparent => "Avô/Avó",
            Self::Parent => "Pai/Mãe",
            Self::Spouse => "Cônjuge",
            Self::Child => "Filho/Filha",
            Self::Grandchild => "Neto/Neta",
            Self::Other => "Outro",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avo" | "grandparent" => Ok(Self::Grandparent),
            "pai" | "parent" => Ok(Self::Parent),
            "conjuge" | "spouse" => Ok(Self::Spouse),
            "filho" | "child" => Ok(Self::Child),
            "neto" | "grandchild" => Ok(Self::Grandchild),
            "outro" | "other" => Ok(Self::Other),
            other => Err(CoreError::Validation(format!(
                "unknown relationship '{other}' (expected one of: avo, pai, conjuge, filho, neto, outro)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// ReceiptType
// ---------------------------------------------------------------------------

/// Kind of receipt issued by the office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptType {
    /// Accounting services.
    Contabilidade,
    /// Insurance brokerage.
    Seguro,
}

impl ReceiptType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contabilidade => "contabilidade",
            Self::Seguro => "seguro",
        }
    }
}

impl fmt::Display for ReceiptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// Type of action recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Created,
    Updated,
    Deleted,
    Linked,
    Unlinked,
}

impl AuditAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::Linked => "linked",
            Self::Unlinked => "unlinked",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Type of entity in the system, used in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Customer,
    FamilyLink,
    Historial,
    Receipt,
    Reminder,
    Audit,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::FamilyLink => "family_link",
            Self::Historial => "historial",
            Self::Receipt => "receipt",
            Self::Reminder => "reminder",
            Self::Audit => "audit",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(rel_spouse, RelationshipKind, RelationshipKind::Spouse, "conjuge");
    test_serde_roundtrip!(rel_grandchild, RelationshipKind, RelationshipKind::Grandchild, "neto");
    test_serde_roundtrip!(
        receipt_accounting,
        ReceiptType,
        ReceiptType::Contabilidade,
        "contabilidade"
    );
    test_serde_roundtrip!(action_unlinked, AuditAction, AuditAction::Unlinked, "unlinked");
    test_serde_roundtrip!(entity_family_link, EntityType, EntityType::FamilyLink, "family_link");

    #[rstest]
    #[case(RelationshipKind::Grandparent, RelationshipKind::Grandchild)]
    #[case(RelationshipKind::Grandchild, RelationshipKind::Grandparent)]
    #[case(RelationshipKind::Parent, RelationshipKind::Child)]
    #[case(RelationshipKind::Child, RelationshipKind::Parent)]
    #[case(RelationshipKind::Spouse, RelationshipKind::Spouse)]
    #[case(RelationshipKind::Other, RelationshipKind::Other)]
    fn reciprocal_table(#[case] kind: RelationshipKind, #[case] expected: RelationshipKind) {
        assert_eq!(kind.reciprocal(), expected);
    }

    #[test]
    fn reciprocal_is_an_involution() {
        for kind in RelationshipKind::ALL {
            assert_eq!(kind.reciprocal().reciprocal(), kind, "{kind}");
        }
    }

    #[test]
    fn self_reciprocal_kinds() {
        assert_eq!(RelationshipKind::Spouse.reciprocal(), RelationshipKind::Spouse);
        assert_eq!(RelationshipKind::Other.reciprocal(), RelationshipKind::Other);
    }

    #[rstest]
    #[case("pai", RelationshipKind::Child)]
    #[case("neto", RelationshipKind::Grandparent)]
    #[case("conjuge", RelationshipKind::Spouse)]
    #[case("primo", RelationshipKind::Other)]
    #[case("", RelationshipKind::Other)]
    fn reciprocal_label_falls_back_to_other(#[case] label: &str, #[case] expected: RelationshipKind) {
        assert_eq!(RelationshipKind::reciprocal_label(label), expected);
    }

    #[test]
    fn parses_stored_codes_and_english_aliases() {
        assert_eq!("conjuge".parse::<RelationshipKind>().unwrap(), RelationshipKind::Spouse);
        assert_eq!("Parent".parse::<RelationshipKind>().unwrap(), RelationshipKind::Parent);
        assert_eq!(" neto ".parse::<RelationshipKind>().unwrap(), RelationshipKind::Grandchild);
    }

    #[test]
    fn rejects_unknown_relationship() {
        let err = "primo".parse::<RelationshipKind>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("primo"));
    }

    #[test]
    fn serde_accepts_english_alias() {
        let kind: RelationshipKind = serde_json::from_str("\"grandparent\"").unwrap();
        assert_eq!(kind, RelationshipKind::Grandparent);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"avo\"");
    }

    #[test]
    fn as_str_matches_serde() {
        for kind in RelationshipKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
