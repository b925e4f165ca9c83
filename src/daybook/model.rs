use crate::error::{JournalError, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MISSING_FIELDS_MESSAGE: &str = "Please provide both a title and content for your entry";

/// A single journal entry.
///
/// `date` is fixed at creation from the creation instant and never follows edits.
/// The serialized shape is `{id, title, content, timestamp, date}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "timestamp")]
    pub created_at: i64,
    pub date: NaiveDate,
}

impl Entry {
    /// Creates an entry stamped with `now`. The entry's day is the calendar day of
    /// `now` in its own timezone.
    pub fn new<Tz: TimeZone>(title: String, content: String, now: &DateTime<Tz>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            created_at: now.timestamp_millis(),
            date: now.date_naive(),
        }
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}

/// A partial update to an entry. Only title and content are editable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl EntryPatch {
    pub fn new(title: String, content: String) -> Self {
        Self {
            title: Some(title),
            content: Some(content),
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Returns a copy of `entry` with the patch applied.
    pub fn apply(&self, entry: &Entry) -> Entry {
        let mut updated = entry.clone();
        if let Some(title) = &self.title {
            updated.title = title.clone();
        }
        if let Some(content) = &self.content {
            updated.content = content.clone();
        }
        updated
    }
}

/// Rejects a title or content that is empty after trimming.
pub fn validate_title_and_content(title: &str, content: &str) -> Result<()> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(JournalError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }
    Ok(())
}
