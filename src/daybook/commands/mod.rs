//! # Command Layer
//!
//! Business logic for each user-facing operation. Commands take the components they
//! need as arguments, return a [`CmdResult`], and never touch a terminal.
//!
//! `CmdResult` is also a [`Notifier`]: notices raised while a command runs (entry
//! saved, validation failed, ...) are collected on the result for the UI to show.

use crate::config::JournalConfig;
use crate::index::DisplayEntry;
use crate::model::Entry;
use crate::notify::{MessageLevel, Notice, Notifier};
use crate::search::SearchResult;
use chrono::NaiveDate;

pub mod analyze;
pub mod calendar;
pub mod config;
pub mod create;
pub mod day;
pub mod edit;
pub mod helpers;
pub mod navigate;
pub mod search;

pub use calendar::MonthView;

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The day the result is about, when there is one.
    pub date: Option<NaiveDate>,
    pub affected_entries: Vec<Entry>,
    pub listed_entries: Vec<DisplayEntry>,
    pub search: Option<SearchResult>,
    pub calendar: Option<MonthView>,
    pub analysis: Option<String>,
    pub config: Option<JournalConfig>,
    pub notices: Vec<Notice>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_config(mut self, config: JournalConfig) -> Self {
        self.config = Some(config);
        self
    }
}

impl Notifier for CmdResult {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
