//! # API Facade
//!
//! The single entry point for journal operations, whatever the UI. It owns the live
//! components (store, cursor, editor, search), dispatches to the command layer and
//! returns `Result<CmdResult>`. No printing happens here.
//!
//! ## Day-relative operations
//!
//! Listing, editing and analysis act on the day under the [`DateCursor`]. Every
//! operation that moves the cursor writes it back to the storage backend, so the next
//! session opens on the same day. A move only takes effect once it is saved; after a
//! committed entry, a failed cursor save is logged and the call still succeeds.
//!
//! ## Validation
//!
//! A rejected draft comes back as [`JournalError::Validation`] carrying the same text
//! as the "Missing information" notice. Notices raised before an error are not
//! returned.
//!
//! ## Generic Over StorageBackend
//!
//! `JournalApi<B: StorageBackend>` runs on `FsBackend` in production and on
//! `MemBackend` in tests.

use crate::analysis::{Analyzer, StaticAnalyzer};
use crate::commands;
use crate::commands::navigate::Move;
use crate::cursor::DateCursor;
use crate::editor::{Draft, EditorState};
use crate::error::{JournalError, Result};
use crate::model::EntryPatch;
use crate::notify::RecordingNotifier;
use crate::search::{parse_any_date, SearchController};
use crate::store::{EntryStore, StorageBackend};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use log::warn;
use std::path::PathBuf;

pub struct JournalApi<B: StorageBackend> {
    store: EntryStore<B>,
    cursor: DateCursor,
    editor: EditorState,
    search: SearchController,
    analyzer: Box<dyn Analyzer>,
    config_dir: PathBuf,
}

impl<B: StorageBackend> JournalApi<B> {
    /// Wraps an opened store. The cursor resumes from the backend.
    pub fn new(store: EntryStore<B>, config_dir: PathBuf) -> Self {
        let cursor = DateCursor::load(store.backend());
        Self {
            store,
            cursor,
            editor: EditorState::new(),
            search: SearchController::new(),
            analyzer: Box::new(StaticAnalyzer),
            config_dir,
        }
    }

    /// Replaces the analyzer used by [`JournalApi::analyze`].
    pub fn with_analyzer(mut self, analyzer: Box<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn store(&self) -> &EntryStore<B> {
        &self.store
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn current_date(&self) -> NaiveDate {
        self.cursor.current()
    }

    /// Lists the day under the cursor.
    pub fn current_day(&self) -> Result<commands::CmdResult> {
        Ok(commands::day::run(&self.store, self.cursor.current()))
    }

    pub fn today(&mut self) -> Result<commands::CmdResult> {
        self.jump(Local::now().date_naive())
    }

    /// Lists `text` (MM/DD/YYYY or YYYY-MM-DD) without moving the cursor.
    pub fn show(&self, text: &str) -> Result<commands::CmdResult> {
        let date = parse_any_date(text)?;
        Ok(commands::day::run(&self.store, date))
    }

    pub fn next_day(&mut self) -> Result<commands::CmdResult> {
        self.navigate(Move::Next)
    }

    pub fn prev_day(&mut self) -> Result<commands::CmdResult> {
        self.navigate(Move::Prev)
    }

    pub fn goto(&mut self, text: &str) -> Result<commands::CmdResult> {
        let date = parse_any_date(text)?;
        self.jump(date)
    }

    pub fn jump(&mut self, date: NaiveDate) -> Result<commands::CmdResult> {
        self.navigate(Move::To(date))
    }

    pub fn create_entry(&mut self, title: String, content: String) -> Result<commands::CmdResult> {
        self.create_entry_at(title, content, &Local::now())
    }

    /// Creates an entry stamped with `now`, then moves the cursor to its day.
    pub fn create_entry_at<Tz: TimeZone>(
        &mut self,
        title: String,
        content: String,
        now: &DateTime<Tz>,
    ) -> Result<commands::CmdResult> {
        let mut result =
            commands::create::run(&mut self.store, &mut self.editor, title, content, now)?;
        if let Some(date) = result.date {
            self.cursor.set_date(date);
            if let Err(e) = self.cursor.save(self.store.backend()) {
                warn!("event=cursor_save module=api status=failed after=create error={e}");
                result.add_message(CmdMessage::warning(
                    "Entry saved, but the current day could not be remembered",
                ));
            }
        }
        Ok(result)
    }

    /// Starts editing the `index`th entry (1-based) of the day under the cursor and
    /// returns its draft.
    pub fn begin_edit(&mut self, index: usize) -> Result<Draft> {
        let target = commands::helpers::entry_on_day(&self.store, self.cursor.current(), index)?;
        self.editor.start_edit(&target.entry);
        Ok(self.editor.draft().clone())
    }

    /// Discards the draft in progress. The result carries the cancel notice when
    /// there was a draft.
    pub fn cancel_edit(&mut self) -> CmdResult {
        let mut result = CmdResult::default().with_date(self.cursor.current());
        self.editor.cancel(&mut result);
        result
    }

    /// Edits the `index`th entry (1-based) of the day under the cursor.
    pub fn edit_entry(&mut self, index: usize, patch: EntryPatch) -> Result<commands::CmdResult> {
        if patch.is_empty() {
            return Err(JournalError::Api(
                "Nothing to change: give a new title or content".to_string(),
            ));
        }
        let date = self.cursor.current();
        let result = commands::edit::run(&mut self.store, &mut self.editor, date, index, &patch);
        if result.is_err() {
            // The failed draft is never shown, so its cancel notice is dropped too.
            self.editor.cancel(&mut RecordingNotifier::new());
        }
        result
    }

    pub fn search(&mut self, query: &str, pick: Option<usize>) -> Result<commands::CmdResult> {
        let mut moved = self.cursor;
        let result = commands::search::run(&self.store, &mut self.search, &mut moved, query, pick)?;
        if pick.is_some() {
            self.commit_cursor(moved)?;
        }
        Ok(result)
    }

    /// Month view around the cursor, or around `month` given as `YYYY-MM`.
    pub fn calendar(&self, month: Option<&str>) -> Result<commands::CmdResult> {
        let day = match month {
            Some(text) => parse_month(text)?,
            None => self.cursor.current(),
        };
        commands::calendar::run(&self.store, day)
    }

    pub fn analyze(&self) -> Result<commands::CmdResult> {
        commands::analyze::run(&self.store, self.analyzer.as_ref(), self.cursor.current())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    fn navigate(&mut self, step: Move) -> Result<commands::CmdResult> {
        let mut moved = self.cursor;
        let result = commands::navigate::run(&self.store, &mut moved, step)?;
        self.commit_cursor(moved)?;
        Ok(result)
    }

    fn commit_cursor(&mut self, moved: DateCursor) -> Result<()> {
        moved.save(self.store.backend())?;
        self.cursor = moved;
        Ok(())
    }
}

fn parse_month(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", text.trim()), "%Y-%m-%d")
        .map_err(|_| JournalError::Parse(format!("{:?}, expected YYYY-MM", text)))
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MonthView};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PLACEHOLDER_ANALYSIS;
    use crate::model::{Entry, MISSING_FIELDS_MESSAGE};
    use crate::notify::MessageLevel;
    use crate::cursor::CURSOR_KEY;
    use crate::store::entry_store::fixtures::noon;
    use crate::store::mem_backend::MemBackend;
    use crate::store::DEFAULT_STORAGE_KEY;

    fn api_on(date: NaiveDate) -> JournalApi<MemBackend> {
        let backend = MemBackend::new().with_slot(
            CURSOR_KEY,
            &serde_json::to_string(&date).unwrap(),
        );
        let store = EntryStore::open(backend, DEFAULT_STORAGE_KEY);
        JournalApi::new(store, PathBuf::from("unused"))
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn resumes_cursor_from_backend() {
        let api = api_on(ymd(2024, 2, 29));
        assert_eq!(api.current_date(), ymd(2024, 2, 29));
    }

    #[test]
    fn write_then_edit_then_search_flow() {
        let mut api = api_on(ymd(2020, 1, 1));

        let created = api
            .create_entry_at("Morning".into(), "Felt good".into(), &noon(2024, 3, 10))
            .unwrap();
        assert_eq!(created.notices[0].title, "Entry added");
        assert_eq!(api.current_date(), ymd(2024, 3, 10));

        let listed = api.current_day().unwrap();
        assert_eq!(listed.listed_entries.len(), 1);
        assert_eq!(listed.listed_entries[0].entry.title, "Morning");

        let edited = api.edit_entry(1, EntryPatch::content("Felt great")).unwrap();
        assert_eq!(edited.notices[0].title, "Entry updated");
        let entry = &api.store().entries()[0];
        assert_eq!(entry.content, "Felt great");
        assert_eq!(entry.title, "Morning");
        assert_eq!(entry.date, ymd(2024, 3, 10));

        api.goto("01/01/2020").unwrap();
        let found = api.search("GREAT", Some(1)).unwrap();
        assert_eq!(found.search.unwrap().matched_entries.len(), 1);
        assert_eq!(api.current_date(), ymd(2024, 3, 10));
    }

    #[test]
    fn navigation_persists_cursor() {
        let mut api = api_on(ymd(2023, 12, 31));
        let result = api.next_day().unwrap();
        assert_eq!(result.date, Some(ymd(2024, 1, 1)));

        let saved = api.store().backend().raw(CURSOR_KEY).unwrap();
        assert_eq!(saved, "\"2024-01-01\"");

        api.prev_day().unwrap();
        assert_eq!(api.current_date(), ymd(2023, 12, 31));
    }

    #[test]
    fn goto_rejects_impossible_dates_and_keeps_cursor() {
        let mut api = api_on(ymd(2024, 6, 1));
        assert!(matches!(api.goto("13/45/2024"), Err(JournalError::Parse(_))));
        assert!(matches!(api.goto("02/30/2024"), Err(JournalError::Parse(_))));
        assert_eq!(api.current_date(), ymd(2024, 6, 1));

        api.goto("2024-02-29").unwrap();
        assert_eq!(api.current_date(), ymd(2024, 2, 29));
    }

    #[test]
    fn show_does_not_move_cursor() {
        let mut api = api_on(ymd(2024, 6, 1));
        api.create_entry_at("Old".into(), "day".into(), &noon(2024, 5, 1))
            .unwrap();
        api.jump(ymd(2024, 6, 1)).unwrap();

        let shown = api.show("05/01/2024").unwrap();
        assert_eq!(shown.listed_entries.len(), 1);
        assert_eq!(api.current_date(), ymd(2024, 6, 1));
    }

    #[test]
    fn edit_failure_leaves_editor_idle() {
        let mut api = api_on(ymd(2024, 6, 1));
        api.create_entry_at("Morning".into(), "Felt good".into(), &noon(2024, 6, 1))
            .unwrap();
        assert!(api.edit_entry(1, EntryPatch::title("   ")).is_err());
        assert!(api.editor().is_idle());
        assert!(matches!(
            api.edit_entry(1, EntryPatch::default()),
            Err(JournalError::Api(_))
        ));
    }

    #[test]
    fn analyze_uses_cursor_day() {
        let mut api = api_on(ymd(2024, 6, 1));
        assert!(matches!(api.analyze(), Err(JournalError::NothingToAnalyze)));

        api.create_entry_at("Morning".into(), "Felt good".into(), &noon(2024, 6, 1))
            .unwrap();
        let result = api.analyze().unwrap();
        assert_eq!(result.analysis.as_deref(), Some(PLACEHOLDER_ANALYSIS));
    }

    #[test]
    fn failed_cursor_save_after_create_still_succeeds() {
        let mut api = api_on(ymd(2024, 6, 1));
        api.store().backend().fail_writes_to(CURSOR_KEY);

        let result = api
            .create_entry_at("Morning".into(), "Felt good".into(), &noon(2024, 6, 3))
            .unwrap();
        assert_eq!(api.store().len(), 1);
        assert_eq!(result.notices[0].title, "Entry added");
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
        assert_eq!(api.current_date(), ymd(2024, 6, 3));
        assert_eq!(
            api.store().backend().raw(CURSOR_KEY),
            Some("\"2024-06-01\"".to_string())
        );
    }

    #[test]
    fn failed_cursor_save_keeps_cursor_in_place() {
        let mut api = api_on(ymd(2024, 6, 1));
        api.create_entry_at("Garden".into(), "tomatoes".into(), &noon(2024, 4, 20))
            .unwrap();
        api.jump(ymd(2024, 6, 1)).unwrap();
        api.store().backend().fail_writes_to(CURSOR_KEY);

        assert!(api.next_day().is_err());
        assert!(api.goto("01/01/2020").is_err());
        assert!(api.search("tomato", Some(1)).is_err());
        assert_eq!(api.current_date(), ymd(2024, 6, 1));
        assert_eq!(
            api.store().backend().raw(CURSOR_KEY),
            Some("\"2024-06-01\"".to_string())
        );
    }

    #[test]
    fn cancel_edit_reports_discarded_draft() {
        let mut api = api_on(ymd(2024, 6, 1));
        api.create_entry_at("Morning".into(), "Felt good".into(), &noon(2024, 6, 1))
            .unwrap();

        let draft = api.begin_edit(1).unwrap();
        assert_eq!(draft.title, "Morning");
        assert_eq!(draft.content, "Felt good");
        assert!(!api.editor().is_idle());

        let result = api.cancel_edit();
        assert_eq!(result.notices[0].title, "Edit cancelled");
        assert!(api.editor().is_idle());
        assert!(api.cancel_edit().notices.is_empty());
        assert!(api.begin_edit(2).is_err());
    }

    #[test]
    fn validation_error_carries_notice_text() {
        let mut api = api_on(ymd(2024, 6, 1));
        let err = api
            .create_entry_at("Morning".into(), " ".into(), &noon(2024, 6, 1))
            .unwrap_err();
        match err {
            JournalError::Validation(text) => assert_eq!(text, MISSING_FIELDS_MESSAGE),
            other => panic!("unexpected {:?}", other),
        }
    }

    struct CountingAnalyzer;

    impl Analyzer for CountingAnalyzer {
        fn analyze(&self, entries: &[&Entry]) -> Result<String> {
            Ok(format!("{} entries", entries.len()))
        }
    }

    #[test]
    fn analyzer_can_be_swapped() {
        let mut api = api_on(ymd(2024, 6, 1)).with_analyzer(Box::new(CountingAnalyzer));
        api.create_entry_at("A".into(), "a".into(), &noon(2024, 6, 1))
            .unwrap();
        api.create_entry_at("B".into(), "b".into(), &noon(2024, 6, 1))
            .unwrap();
        let result = api.analyze().unwrap();
        assert_eq!(result.analysis.as_deref(), Some("2 entries"));
    }

    #[test]
    fn calendar_parses_month() {
        let api = api_on(ymd(2024, 6, 15));
        let view = api.calendar(None).unwrap().calendar.unwrap();
        assert_eq!((view.year, view.month), (2024, 6));

        let view = api.calendar(Some("2023-02")).unwrap().calendar.unwrap();
        assert_eq!(view.days.len(), 28);
        assert!(matches!(api.calendar(Some("2023-13")), Err(JournalError::Parse(_))));
    }
}
