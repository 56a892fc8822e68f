//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::{NaiveDate, Utc};
use maiato_core::audit_detail::{LinkedDetail, NumberedDetail, ReminderDetail, UnlinkedDetail};
use maiato_core::entities::*;
use maiato_core::enums::*;
use maiato_core::responses::*;
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn maria() -> Customer {
    Customer {
        id: "cus-00000001".into(),
        name: "Maria Silva".into(),
        email: Some("maria@exemplo.pt".into()),
        phone: None,
        nif: Some("123456789".into()),
        address: Some("Rua do Maiato 12, Porto".into()),
        notes: None,
        user_id: "00000000-0000-0000-0000-000000000000".into(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn link(id: &str, from: &str, to: &str, kind: RelationshipKind) -> FamilyLink {
    FamilyLink {
        id: id.into(),
        customer_id: from.into(),
        related_customer_id: to.into(),
        relationship: kind,
        display_name: "Pedro Silva".into(),
        created_at: Utc::now(),
    }
}

roundtrip_and_validate!(customer_roundtrip, Customer, maria());

roundtrip_and_validate!(
    new_customer_roundtrip,
    NewCustomer,
    NewCustomer {
        name: "João Costa".into(),
        phone: Some("912345678".into()),
        ..NewCustomer::default()
    }
);

roundtrip_and_validate!(
    family_link_roundtrip,
    FamilyLink,
    link("fam-a1b2c3d4", "cus-00000001", "cus-00000002", RelationshipKind::Parent)
);

roundtrip_and_validate!(
    family_link_pair_roundtrip,
    FamilyLinkPair,
    FamilyLinkPair {
        forward: link("fam-a1b2c3d4", "cus-00000001", "cus-00000002", RelationshipKind::Parent),
        reverse: link("fam-e5f6a7b8", "cus-00000002", "cus-00000001", RelationshipKind::Child),
    }
);

roundtrip_and_validate!(
    historial_roundtrip,
    HistorialEntry,
    HistorialEntry {
        id: "his-0badf00d".into(),
        customer_id: "cus-00000001".into(),
        historial_number: "H0001".into(),
        occurrence: "Entrega do IRS".into(),
        occurrence_date: NaiveDate::from_ymd_opt(2026, 4, 30).unwrap(),
        response: None,
        urgent: true,
        viewed: false,
        user_id: "00000000-0000-0000-0000-000000000000".into(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    receipt_roundtrip,
    Receipt,
    Receipt {
        id: "rec-12345678".into(),
        customer_id: "cus-00000001".into(),
        receipt_number: "REC-20261017-001".into(),
        receipt_type: ReceiptType::Contabilidade,
        sub_type: Some("avença mensal".into()),
        amount: 125.5,
        description: None,
        issue_date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
        user_id: "00000000-0000-0000-0000-000000000000".into(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    new_receipt_roundtrip,
    NewReceipt,
    NewReceipt {
        receipt_type: ReceiptType::Seguro,
        sub_type: None,
        amount: 40.0,
        description: Some("Seguro automóvel".into()),
        issue_date: None,
    }
);

fn renewal_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 11, 2)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

roundtrip_and_validate!(
    reminder_roundtrip,
    Reminder,
    Reminder {
        id: "rem-c0ffee00".into(),
        customer_id: "cus-00000001".into(),
        title: "Renovar seguro automóvel".into(),
        description: Some("Apólice vence a 15".into()),
        reminder_date: renewal_time(),
        completed: false,
        user_id: "00000000-0000-0000-0000-000000000000".into(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    new_reminder_roundtrip,
    NewReminder,
    NewReminder {
        title: "Ligar sobre o IRS".into(),
        description: None,
        reminder_date: renewal_time(),
    }
);

roundtrip_and_validate!(
    reminder_detail_roundtrip,
    ReminderDetail,
    ReminderDetail {
        customer_id: "cus-00000001".into(),
        title: "Ligar sobre o IRS".into(),
        reminder_date: "2026-11-02T09:00:00".into(),
    }
);

roundtrip_and_validate!(
    audit_entry_roundtrip,
    AuditEntry,
    AuditEntry {
        id: "aud-deadbeef".into(),
        user_id: Some("00000000-0000-0000-0000-000000000000".into()),
        entity_type: EntityType::FamilyLink,
        entity_id: "fam-a1b2c3d4".into(),
        action: AuditAction::Linked,
        detail: Some(serde_json::json!({"relationship": "pai"})),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    linked_detail_roundtrip,
    LinkedDetail,
    LinkedDetail {
        customer_id: "cus-00000001".into(),
        related_customer_id: "cus-00000002".into(),
        relationship: "pai".into(),
        reciprocal: "filho".into(),
        reverse_link_id: "fam-e5f6a7b8".into(),
    }
);

roundtrip_and_validate!(
    unlinked_detail_roundtrip,
    UnlinkedDetail,
    UnlinkedDetail {
        customer_id: "cus-00000001".into(),
        related_customer_id: "cus-00000002".into(),
        relationship: "conjuge".into(),
        rows_removed: 2,
    }
);

roundtrip_and_validate!(
    numbered_detail_roundtrip,
    NumberedDetail,
    NumberedDetail {
        customer_id: "cus-00000001".into(),
        number: "H0003".into(),
    }
);

roundtrip_and_validate!(
    unlink_response_roundtrip,
    UnlinkResponse,
    UnlinkResponse {
        link_id: "fam-a1b2c3d4".into(),
        rows_removed: 1,
    }
);

roundtrip_and_validate!(
    reciprocal_response_roundtrip,
    ReciprocalResponse,
    ReciprocalResponse {
        relationship: "avo".into(),
        reciprocal: RelationshipKind::Grandchild,
        label: "Neto/Neta".into(),
    }
);

#[test]
fn pair_mirror_check() {
    let pair = FamilyLinkPair {
        forward: link("fam-1", "cus-1", "cus-2", RelationshipKind::Grandparent),
        reverse: link("fam-2", "cus-2", "cus-1", RelationshipKind::Grandchild),
    };
    assert!(pair.is_mirrored());

    let broken = FamilyLinkPair {
        forward: link("fam-1", "cus-1", "cus-2", RelationshipKind::Grandparent),
        reverse: link("fam-2", "cus-2", "cus-1", RelationshipKind::Grandparent),
    };
    assert!(!broken.is_mirrored());
}

#[test]
fn relationship_schema_lists_stored_codes() {
    let schema = serde_json::to_value(schema_for!(RelationshipKind)).unwrap();
    let rendered = schema.to_string();
    for code in ["avo", "pai", "conjuge", "filho", "neto", "outro"] {
        assert!(rendered.contains(code), "schema should mention {code}: {rendered}");
    }
}
