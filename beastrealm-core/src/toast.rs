//! Stacked notifications for pages that show several messages at once.
//!
//! Unlike the single overlay toast, entries here accumulate until removed.
//! [`ToastStack::push`] reports the auto-dismiss delay; the host schedules the
//! matching [`ToastStack::remove`].

use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);
pub const ERROR_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastLevel {
    #[must_use]
    pub const fn default_duration(self) -> Duration {
        match self {
            Self::Error => ERROR_DURATION,
            Self::Success | Self::Info | Self::Warning => DEFAULT_DURATION,
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Info => "alert-info",
            Self::Warning => "alert-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: ToastId,
    pub message: String,
    pub level: ToastLevel,
    pub duration: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastStack {
    entries: Vec<ToastEntry>,
    next_id: u64,
}

impl ToastStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. `duration` of `None` uses the level default; a zero
    /// duration keeps the entry until removed. Returns the id and the delay
    /// after which the host should remove it, if any.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        level: ToastLevel,
        duration: Option<Duration>,
    ) -> (ToastId, Option<Duration>) {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        let duration = duration.unwrap_or_else(|| level.default_duration());
        self.entries.push(ToastEntry {
            id,
            message: message.into(),
            level,
            duration,
        });
        let dismiss_after = (!duration.is_zero()).then_some(duration);
        (id, dismiss_after)
    }

    pub fn success(&mut self, message: impl Into<String>) -> (ToastId, Option<Duration>) {
        self.push(message, ToastLevel::Success, None)
    }

    pub fn error(&mut self, message: impl Into<String>) -> (ToastId, Option<Duration>) {
        self.push(message, ToastLevel::Error, None)
    }

    pub fn info(&mut self, message: impl Into<String>) -> (ToastId, Option<Duration>) {
        self.push(message, ToastLevel::Info, None)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> (ToastId, Option<Duration>) {
        self.push(message, ToastLevel::Warning, None)
    }

    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }
}
