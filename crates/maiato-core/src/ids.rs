//! ID prefix constants.
//!
//! Every row id is `{prefix}-{8 hex chars}`, generated by the database
//! (see `MaiatoDb::generate_id`).

pub const PREFIX_CUSTOMER: &str = "cus";
pub const PREFIX_FAMILY_LINK: &str = "fam";
pub const PREFIX_HISTORIAL: &str = "his";
pub const PREFIX_RECEIPT: &str = "rec";
pub const PREFIX_REMINDER: &str = "rem";
pub const PREFIX_AUDIT: &str = "aud";

/// All prefixes, in table order.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_CUSTOMER,
    PREFIX_FAMILY_LINK,
    PREFIX_HISTORIAL,
    PREFIX_RECEIPT,
    PREFIX_REMINDER,
    PREFIX_AUDIT,
];

/// Return the prefix portion of an id, if it has one.
#[must_use]
pub fn prefix_of(id: &str) -> Option<&str> {
    id.split_once('-').map(|(prefix, _)| prefix)
}
