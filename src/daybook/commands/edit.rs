use crate::commands::{CmdMessage, CmdResult};
use crate::editor::{CommitOutcome, EditorState};
use crate::error::Result;
use crate::model::EntryPatch;
use crate::store::{EntryStore, StorageBackend};
use chrono::{NaiveDate, Utc};

use super::helpers::{day_entries, entry_on_day};

/// Edits the `index`th entry of `date`. Fields missing from `patch` keep their
/// current value.
pub fn run<B: StorageBackend>(
    store: &mut EntryStore<B>,
    editor: &mut EditorState,
    date: NaiveDate,
    index: usize,
    patch: &EntryPatch,
) -> Result<CmdResult> {
    let target = entry_on_day(store, date, index)?;

    editor.start_edit(&target.entry);
    if let Some(title) = &patch.title {
        editor.set_title(title.clone());
    }
    if let Some(content) = &patch.content {
        editor.set_content(content.clone());
    }

    let mut result = CmdResult::default().with_date(date);
    match editor.commit(store, &Utc::now(), &mut result)? {
        CommitOutcome::Updated(entry) => {
            result.add_message(CmdMessage::success(format!(
                "Entry {} updated: {}",
                target.index, entry.title
            )));
            result.affected_entries.push(entry);
        }
        CommitOutcome::NotFound(id) => {
            result.add_message(CmdMessage::warning(format!("Entry {} no longer exists", id)));
        }
        CommitOutcome::Created(_) => {}
    }
    result.listed_entries = day_entries(store, date);
    Ok(result)
}
