//! Reminder update builder.

use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReminderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl ReminderUpdate {
    /// Whether the update would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.reminder_date.is_none()
            && self.completed.is_none()
    }
}

pub struct ReminderUpdateBuilder(ReminderUpdate);

impl ReminderUpdateBuilder {
    pub fn new() -> Self {
        Self(ReminderUpdate::default())
    }

    pub fn title(mut self, val: impl Into<String>) -> Self {
        self.0.title = Some(val.into());
        self
    }

    pub fn description(mut self, val: Option<String>) -> Self {
        self.0.description = Some(val);
        self
    }

    pub const fn reminder_date(mut self, val: NaiveDateTime) -> Self {
        self.0.reminder_date = Some(val);
        self
    }

    pub const fn completed(mut self, val: bool) -> Self {
        self.0.completed = Some(val);
        self
    }

    pub fn build(self) -> ReminderUpdate {
        self.0
    }
}

impl Default for ReminderUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
