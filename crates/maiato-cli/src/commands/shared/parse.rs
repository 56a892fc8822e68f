use chrono::{NaiveDate, NaiveTime};
use maiato_core::enums::RelationshipKind;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a relationship code (`pai`) or English name (`parent`).
pub fn parse_relationship(raw: &str) -> anyhow::Result<RelationshipKind> {
    raw.parse::<RelationshipKind>().map_err(anyhow::Error::from)
}

/// Parse an optional `YYYY-MM-DD` date argument.
pub fn parse_date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|error| anyhow::anyhow!("invalid {field} '{value}' (expected YYYY-MM-DD): {error}"))
    })
    .transpose()
}

/// Parse an optional `HH:MM` time argument.
pub fn parse_time(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveTime>> {
    raw.map(|value| {
        NaiveTime::parse_from_str(value.trim(), "%H:%M")
            .map_err(|error| anyhow::anyhow!("invalid {field} '{value}' (expected HH:MM): {error}"))
    })
    .transpose()
}

/// Map a CLI value for an optional field: empty clears it, absent leaves it.
pub fn clearable(raw: Option<&str>) -> Option<Option<String>> {
    raw.map(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}
