//! Historial update builder.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct HistorialUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewed: Option<bool>,
}

pub struct HistorialUpdateBuilder(HistorialUpdate);

impl HistorialUpdateBuilder {
    pub fn new() -> Self {
        Self(HistorialUpdate::default())
    }

    pub fn occurrence(mut self, val: impl Into<String>) -> Self {
        self.0.occurrence = Some(val.into());
        self
    }

    pub fn occurrence_date(mut self, val: NaiveDate) -> Self {
        self.0.occurrence_date = Some(val);
        self
    }

    pub fn response(mut self, val: Option<String>) -> Self {
        self.0.response = Some(val);
        self
    }

    pub fn urgent(mut self, val: bool) -> Self {
        self.0.urgent = Some(val);
        self
    }

    pub fn viewed(mut self, val: bool) -> Self {
        self.0.viewed = Some(val);
        self
    }

    pub fn build(self) -> HistorialUpdate {
        self.0
    }
}

impl Default for HistorialUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
