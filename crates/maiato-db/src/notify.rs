//! User-facing notices and cache invalidation signals.
//!
//! Every mutation on `MaiatoService` reports its outcome through a
//! [`Notifier`]: a success or error [`Notice`] for the person at the desk, and
//! one [`StaleQuery`] per logical query whose cached result is now out of date.
//! Notifiers are fire-and-forget and never fail the calling operation.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A message to show the user after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// A logical query whose cached result is stale after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "query", content = "customer_id", rename_all = "snake_case")]
pub enum StaleQuery {
    /// The full customer list.
    Customers,
    /// One customer's record.
    Customer(String),
    /// Family members of a customer.
    FamilyMembers(String),
    /// A customer's historial entries.
    Historial(String),
    /// A customer's receipts.
    Receipts(String),
    /// A customer's reminders.
    Reminders(String),
}

impl fmt::Display for StaleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Customers => f.write_str("customers"),
            Self::Customer(id) => write!(f, "customer:{id}"),
            Self::FamilyMembers(id) => write!(f, "family-members:{id}"),
            Self::Historial(id) => write!(f, "historial:{id}"),
            Self::Receipts(id) => write!(f, "receipts:{id}"),
            Self::Reminders(id) => write!(f, "reminders:{id}"),
        }
    }
}

/// Sink for notices and invalidations.
pub trait Notifier: Send + Sync {
    fn notice(&self, notice: Notice);

    fn invalidate(&self, query: &StaleQuery);
}

/// Default notifier: records everything through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notice(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!(message = %notice.message, "notice"),
            NoticeLevel::Error => tracing::warn!(message = %notice.message, "notice"),
        }
    }

    fn invalidate(&self, query: &StaleQuery) {
        tracing::debug!(%query, "invalidate");
    }
}

/// Notifier that keeps everything it receives, for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
    stale: Mutex<Vec<StaleQuery>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Invalidations received so far, oldest first.
    pub fn stale(&self) -> Vec<StaleQuery> {
        self.stale
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Most recent notice, if any.
    pub fn last_notice(&self) -> Option<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Forget everything received so far.
    pub fn clear(&self) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.stale
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notice(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }

    fn invalidate(&self, query: &StaleQuery) {
        self.stale
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(query.clone());
    }
}
