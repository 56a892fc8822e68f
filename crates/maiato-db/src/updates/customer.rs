//! Customer update builder.

use serde::Serialize;

/// Changed customer fields. `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nif: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl CustomerUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.nif.is_none()
            && self.address.is_none()
            && self.notes.is_none()
    }
}

pub struct CustomerUpdateBuilder(CustomerUpdate);

impl CustomerUpdateBuilder {
    pub fn new() -> Self {
        Self(CustomerUpdate::default())
    }

    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    pub fn email(mut self, val: Option<String>) -> Self {
        self.0.email = Some(val);
        self
    }

    pub fn phone(mut self, val: Option<String>) -> Self {
        self.0.phone = Some(val);
        self
    }

    pub fn nif(mut self, val: Option<String>) -> Self {
        self.0.nif = Some(val);
        self
    }

    pub fn address(mut self, val: Option<String>) -> Self {
        self.0.address = Some(val);
        self
    }

    pub fn notes(mut self, val: Option<String>) -> Self {
        self.0.notes = Some(val);
        self
    }

    pub fn build(self) -> CustomerUpdate {
        self.0
    }
}

impl Default for CustomerUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
