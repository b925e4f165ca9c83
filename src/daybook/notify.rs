//! User-visible notifications.
//!
//! A [`Notice`] is the library's equivalent of a toast: a title, a one-line
//! description and how long a UI should keep it on screen. Delivery is
//! fire-and-forget through the [`Notifier`] trait; the library never waits on it.

pub const DEFAULT_DURATION_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: MessageLevel,
    pub title: String,
    pub description: String,
    pub duration_ms: u64,
}

impl Notice {
    pub fn new(level: MessageLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, title, description)
    }
}

pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Keeps every notice it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.notices.iter().map(|n| n.title.as_str()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_stay_up_for_the_default_duration() {
        let notices = [
            Notice::success("Entry added", "saved"),
            Notice::warning("Missing information", "fill both"),
            Notice::info("Edit cancelled", "discarded"),
        ];
        for notice in &notices {
            assert_eq!(notice.duration_ms, DEFAULT_DURATION_MS);
        }
        assert_eq!(DEFAULT_DURATION_MS, 2000);
        assert_eq!(notices[1].level, MessageLevel::Warning);
    }

    #[test]
    fn recorder_keeps_order() {
        let mut recorder = RecordingNotifier::new();
        recorder.notify(Notice::info("first", ""));
        recorder.notify(Notice::info("second", ""));
        assert_eq!(recorder.titles(), vec!["first", "second"]);
    }
}
