use crate::commands::{CmdMessage, CmdResult};
use crate::editor::{CommitOutcome, EditorState};
use crate::error::Result;
use crate::store::{EntryStore, StorageBackend};
use chrono::{DateTime, TimeZone};

use super::helpers::day_entries;

/// Drafts and commits a new entry stamped with `now`. A rejected draft is
/// reported only through `JournalError::Validation`.
pub fn run<B: StorageBackend, Tz: TimeZone>(
    store: &mut EntryStore<B>,
    editor: &mut EditorState,
    title: String,
    content: String,
    now: &DateTime<Tz>,
) -> Result<CmdResult> {
    editor.start_new();
    editor.set_title(title);
    editor.set_content(content);

    let mut result = CmdResult::default();
    if let CommitOutcome::Created(entry) = editor.commit(store, now, &mut result)? {
        let listed = day_entries(store, entry.date);
        let position = listed.len();
        result.add_message(CmdMessage::success(format!(
            "Entry {} added to {}: {}",
            position, entry.date, entry.title
        )));
        result.date = Some(entry.date);
        result.affected_entries.push(entry);
        result.listed_entries = listed;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalError;
    use crate::store::entry_store::fixtures::{noon, StoreFixture};

    #[test]
    fn creates_entry_on_the_day_of_now() {
        let mut store = StoreFixture::new().store;
        let mut editor = EditorState::new();

        let result = run(
            &mut store,
            &mut editor,
            "Morning".into(),
            "Felt good".into(),
            &noon(2024, 7, 4),
        )
        .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(result.date, chrono::NaiveDate::from_ymd_opt(2024, 7, 4));
        assert_eq!(result.affected_entries[0].title, "Morning");
        assert_eq!(result.listed_entries.len(), 1);
        assert_eq!(result.notices[0].title, "Entry added");
        assert!(editor.is_idle());
    }

    #[test]
    fn blank_content_is_rejected() {
        let mut store = StoreFixture::new().store;
        let mut editor = EditorState::new();

        let err = run(
            &mut store,
            &mut editor,
            "Morning".into(),
            "  ".into(),
            &noon(2024, 7, 4),
        )
        .unwrap_err();

        assert!(matches!(err, JournalError::Validation(_)));
        assert!(store.is_empty());
    }
}
