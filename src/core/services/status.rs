// src/core/services/status.rs
use crate::models::common::TimestampMs;

pub const DEFAULT_STATUS_DURATION_MS: u64 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusEntry {
    pub text: String,
    pub level: StatusLevel,
    clears_at: TimestampMs,
}

/// A transient inline status message. Showing a new message replaces the
/// previous one and its expiry; `tick` clears text and level together once
/// the deadline passes.
#[derive(Clone, Debug, Default)]
pub struct StatusChannel {
    current: Option<StatusEntry>,
}

impl StatusChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(
        &mut self,
        text: impl Into<String>,
        level: StatusLevel,
        now: TimestampMs,
        duration_ms: u64,
    ) {
        self.current = Some(StatusEntry {
            text: text.into(),
            level,
            clears_at: now + duration_ms,
        });
    }

    pub fn show_success(&mut self, text: impl Into<String>, now: TimestampMs) {
        self.show(text, StatusLevel::Success, now, DEFAULT_STATUS_DURATION_MS);
    }

    pub fn show_error(&mut self, text: impl Into<String>, now: TimestampMs) {
        self.show(text, StatusLevel::Error, now, DEFAULT_STATUS_DURATION_MS);
    }

    pub fn current(&self) -> Option<&StatusEntry> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Clears the message once its deadline has passed.
    pub fn tick(&mut self, now: TimestampMs) {
        if let Some(entry) = &self.current {
            if entry.clears_at <= now {
                self.current = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_clears_at_deadline_and_not_before() {
        let mut status = StatusChannel::new();
        status.show_error("bad", 1_000);

        status.tick(1_000 + DEFAULT_STATUS_DURATION_MS - 1);
        assert_eq!(status.current().unwrap().text, "bad");
        assert_eq!(status.current().unwrap().level, StatusLevel::Error);

        status.tick(1_000 + DEFAULT_STATUS_DURATION_MS);
        assert!(status.current().is_none());
    }

    #[test]
    fn newer_message_replaces_older_deadline() {
        let mut status = StatusChannel::new();
        status.show_success("first", 0);
        status.show("second", StatusLevel::Success, 2_000, 5_000);

        // First message's deadline passing must not clear the second.
        status.tick(3_500);
        assert_eq!(status.current().unwrap().text, "second");

        status.tick(7_000);
        assert!(status.current().is_none());
    }
}
