//! Receipt update builder. The receipt number is never updated.

use chrono::NaiveDate;
use maiato_core::enums::ReceiptType;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReceiptUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_type: Option<ReceiptType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
}

impl ReceiptUpdate {
    /// Whether the update would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.receipt_type.is_none()
            && self.sub_type.is_none()
            && self.amount.is_none()
            && self.description.is_none()
            && self.issue_date.is_none()
    }
}

pub struct ReceiptUpdateBuilder(ReceiptUpdate);

impl ReceiptUpdateBuilder {
    pub fn new() -> Self {
        Self(ReceiptUpdate::default())
    }

    pub const fn receipt_type(mut self, val: ReceiptType) -> Self {
        self.0.receipt_type = Some(val);
        self
    }

    pub fn sub_type(mut self, val: Option<String>) -> Self {
        self.0.sub_type = Some(val);
        self
    }

    pub const fn amount(mut self, val: f64) -> Self {
        self.0.amount = Some(val);
        self
    }

    pub fn description(mut self, val: Option<String>) -> Self {
        self.0.description = Some(val);
        self
    }

    pub const fn issue_date(mut self, val: NaiveDate) -> Self {
        self.0.issue_date = Some(val);
        self
    }

    pub fn build(self) -> ReceiptUpdate {
        self.0
    }
}

impl Default for ReceiptUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
