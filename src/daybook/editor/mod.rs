//! # Editor State
//!
//! There is at most one draft in progress. [`EditorState`] is a small state machine
//! around it:
//!
//! ```text
//!            start_new()                    start_edit(entry)
//!   Idle ─────────────────▶ Drafting(New)   Idle ─────────────▶ Drafting(Editing(id))
//!     ▲                          │                                   │
//!     └──── commit() ok / cancel() ◀─────────────────────────────────┘
//! ```
//!
//! `start_new` and `start_edit` may be called from any state and replace the current
//! draft. A `commit` that fails validation or storage leaves the state and the draft
//! exactly as they were, so the user can fix the draft and retry.
//!
//! Every commit outcome and every cancel is announced through a [`Notifier`].

pub mod external;

use crate::error::{JournalError, Result};
use crate::model::{validate_title_and_content, Entry, EntryPatch, MISSING_FIELDS_MESSAGE};
use crate::notify::{Notice, Notifier};
use crate::store::{EntryStore, StorageBackend};
use chrono::{DateTime, TimeZone};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftMode {
    New,
    Editing(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Idle,
    Drafting(DraftMode),
}

/// The uncommitted title/content pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Created(Entry),
    Updated(Entry),
    /// The edited entry no longer exists; nothing was written.
    NotFound(String),
}

#[derive(Debug)]
pub struct EditorState {
    mode: EditorMode,
    draft: Draft,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Idle,
            draft: Draft::default(),
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_idle(&self) -> bool {
        self.mode == EditorMode::Idle
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn start_new(&mut self) {
        self.mode = EditorMode::Drafting(DraftMode::New);
        self.draft = Draft::default();
    }

    pub fn start_edit(&mut self, entry: &Entry) {
        self.mode = EditorMode::Drafting(DraftMode::Editing(entry.id.clone()));
        self.draft = Draft {
            title: entry.title.clone(),
            content: entry.content.clone(),
        };
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Validates the draft and hands it to the store.
    ///
    /// `now` stamps new entries; it is ignored for edits.
    pub fn commit<B: StorageBackend, Tz: TimeZone>(
        &mut self,
        store: &mut EntryStore<B>,
        now: &DateTime<Tz>,
        notifier: &mut dyn Notifier,
    ) -> Result<CommitOutcome> {
        let EditorMode::Drafting(mode) = &self.mode else {
            return Err(JournalError::Api("Nothing to save: no draft in progress".to_string()));
        };

        if let Err(e) = validate_title_and_content(&self.draft.title, &self.draft.content) {
            debug!("event=draft_commit module=editor status=rejected reason=validation");
            notifier.notify(Notice::warning("Missing information", MISSING_FIELDS_MESSAGE));
            return Err(e);
        }

        let outcome = match mode {
            DraftMode::New => {
                let entry = Entry::new(self.draft.title.clone(), self.draft.content.clone(), now);
                store.append(entry.clone())?;
                notifier.notify(Notice::success("Entry added", "Your journal entry has been saved"));
                CommitOutcome::Created(entry)
            }
            DraftMode::Editing(id) => {
                if store.get(id).is_none() {
                    notifier.notify(Notice::warning(
                        "Entry not found",
                        "The entry you were editing no longer exists",
                    ));
                    CommitOutcome::NotFound(id.clone())
                } else {
                    let patch = EntryPatch::new(self.draft.title.clone(), self.draft.content.clone());
                    store.update_by_id(id, &patch)?;
                    let updated = store
                        .get(id)
                        .cloned()
                        .ok_or_else(|| JournalError::Store(format!("Entry {} vanished during update", id)))?;
                    notifier.notify(Notice::success("Entry updated", "Your changes have been saved"));
                    CommitOutcome::Updated(updated)
                }
            }
        };

        self.mode = EditorMode::Idle;
        self.draft = Draft::default();
        Ok(outcome)
    }

    /// Discards the draft. A no-op when idle.
    pub fn cancel(&mut self, notifier: &mut dyn Notifier) {
        if self.is_idle() {
            return;
        }
        self.mode = EditorMode::Idle;
        self.draft = Draft::default();
        notifier.notify(Notice::info("Edit cancelled", "Your draft was discarded"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::store::entry_store::fixtures::{noon, StoreFixture};
    use crate::store::DEFAULT_STORAGE_KEY;

    #[test]
    fn start_new_clears_any_draft() {
        let mut editor = EditorState::new();
        editor.set_title("leftover");
        editor.start_new();
        assert_eq!(editor.mode(), &EditorMode::Drafting(DraftMode::New));
        assert_eq!(editor.draft(), &Draft::default());
    }

    #[test]
    fn start_edit_prefills_draft() {
        let store = StoreFixture::new()
            .with_entry("Morning", "Felt good", noon(2024, 1, 1))
            .store;
        let entry = &store.entries()[0];

        let mut editor = EditorState::new();
        editor.start_new();
        editor.start_edit(entry);
        assert_eq!(
            editor.mode(),
            &EditorMode::Drafting(DraftMode::Editing(entry.id.clone()))
        );
        assert_eq!(editor.draft().title, "Morning");
        assert_eq!(editor.draft().content, "Felt good");
    }

    #[test]
    fn commit_new_appends_and_goes_idle() {
        let mut store = StoreFixture::new().store;
        let mut editor = EditorState::new();
        let mut notifier = RecordingNotifier::new();

        editor.start_new();
        editor.set_title("Morning");
        editor.set_content("Felt good");
        let outcome = editor
            .commit(&mut store, &noon(2024, 6, 1), &mut notifier)
            .unwrap();

        let CommitOutcome::Created(entry) = outcome else {
            panic!("expected Created");
        };
        assert_eq!(store.entries(), &[entry]);
        assert!(editor.is_idle());
        assert_eq!(editor.draft(), &Draft::default());
        assert_eq!(notifier.titles(), vec!["Entry added"]);
    }

    #[test]
    fn invalid_commit_keeps_state_and_store() {
        let mut store = StoreFixture::new().store;
        let mut editor = EditorState::new();
        let mut notifier = RecordingNotifier::new();

        editor.start_new();
        editor.set_title("Only a title");
        let err = editor
            .commit(&mut store, &noon(2024, 6, 1), &mut notifier)
            .unwrap_err();

        assert!(matches!(err, JournalError::Validation(_)));
        assert_eq!(editor.mode(), &EditorMode::Drafting(DraftMode::New));
        assert_eq!(editor.draft().title, "Only a title");
        assert!(store.is_empty());
        assert_eq!(store.backend().raw(DEFAULT_STORAGE_KEY), None);
        assert_eq!(notifier.titles(), vec!["Missing information"]);
    }

    #[test]
    fn commit_edit_updates_in_place() {
        let mut store = StoreFixture::new()
            .with_entry("Morning", "Felt good", noon(2024, 6, 1))
            .store;
        let original = store.entries()[0].clone();
        let mut editor = EditorState::new();
        let mut notifier = RecordingNotifier::new();

        editor.start_edit(&original);
        editor.set_content("Felt great");
        let outcome = editor
            .commit(&mut store, &noon(2024, 6, 9), &mut notifier)
            .unwrap();

        let CommitOutcome::Updated(updated) = outcome else {
            panic!("expected Updated");
        };
        assert_eq!(updated.content, "Felt great");
        assert_eq!(updated.title, original.title);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.date, original.date);
        assert_eq!(store.len(), 1);
        assert_eq!(notifier.titles(), vec!["Entry updated"]);
    }

    #[test]
    fn commit_edit_of_missing_entry_writes_nothing() {
        let source = StoreFixture::new()
            .with_entry("Elsewhere", "body", noon(2024, 6, 1))
            .store;
        let foreign = source.entries()[0].clone();

        let mut store = StoreFixture::new().store;
        let mut editor = EditorState::new();
        let mut notifier = RecordingNotifier::new();
        editor.start_edit(&foreign);
        let outcome = editor
            .commit(&mut store, &noon(2024, 6, 1), &mut notifier)
            .unwrap();

        assert_eq!(outcome, CommitOutcome::NotFound(foreign.id));
        assert!(store.is_empty());
        assert!(editor.is_idle());
    }

    #[test]
    fn storage_failure_keeps_draft() {
        let mut store = StoreFixture::new().store;
        store.backend().set_simulate_write_error(true);
        let mut editor = EditorState::new();
        let mut notifier = RecordingNotifier::new();

        editor.start_new();
        editor.set_title("Morning");
        editor.set_content("Felt good");
        assert!(editor
            .commit(&mut store, &noon(2024, 6, 1), &mut notifier)
            .is_err());
        assert_eq!(editor.draft().title, "Morning");
        assert!(!editor.is_idle());
        assert!(notifier.notices.is_empty());
    }

    #[test]
    fn commit_while_idle_is_an_error() {
        let mut store = StoreFixture::new().store;
        let mut editor = EditorState::new();
        let mut notifier = RecordingNotifier::new();
        assert!(matches!(
            editor.commit(&mut store, &noon(2024, 6, 1), &mut notifier),
            Err(JournalError::Api(_))
        ));
    }

    #[test]
    fn cancel_discards_without_persisting() {
        let store = StoreFixture::new().store;
        let mut editor = EditorState::new();
        let mut notifier = RecordingNotifier::new();

        editor.start_new();
        editor.set_title("Draft");
        editor.set_content("Never saved");
        editor.cancel(&mut notifier);

        assert!(editor.is_idle());
        assert_eq!(editor.draft(), &Draft::default());
        assert!(store.is_empty());
        assert_eq!(notifier.titles(), vec!["Edit cancelled"]);

        editor.cancel(&mut notifier);
        assert_eq!(notifier.notices.len(), 1);
    }
}
