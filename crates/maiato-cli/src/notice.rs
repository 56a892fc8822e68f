//! Notifier that prints notices to stderr, keeping stdout for command output.
//!
//! Failures are not printed here: the error travels back to `main`, which
//! reports it once.

use maiato_db::notify::{Notice, NoticeLevel, Notifier, StaleQuery};

pub struct StderrNotifier {
    quiet: bool,
}

impl StderrNotifier {
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// The stderr line for `notice`, if any.
    fn line(&self, notice: &Notice) -> Option<String> {
        match notice.level {
            NoticeLevel::Success if !self.quiet => Some(notice.message.clone()),
            NoticeLevel::Success | NoticeLevel::Error => None,
        }
    }
}

impl Notifier for StderrNotifier {
    fn notice(&self, notice: Notice) {
        if let Some(line) = self.line(&notice) {
            eprintln!("{line}");
        } else if notice.level == NoticeLevel::Error {
            tracing::debug!(message = %notice.message, "error notice");
        }
    }

    // The CLI keeps no cache; each invocation reads fresh.
    fn invalidate(&self, query: &StaleQuery) {
        tracing::trace!(%query, "stale");
    }
}
