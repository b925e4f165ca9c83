//! # Search
//!
//! [`SearchController`] turns a free-text query into the matched entries and the set
//! of days they were written on, and moves the [`DateCursor`] when the user picks one
//! of those days.
//!
//! Human-entered dates go through [`parse_user_date`], which only accepts
//! `MM/DD/YYYY`. Anything else is a [`JournalError::Parse`]; malformed input never
//! falls back to today.

use crate::cursor::DateCursor;
use crate::error::{JournalError, Result};
use crate::index::EntryIndex;
use crate::model::Entry;
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub query: String,
    pub matched_dates: BTreeSet<NaiveDate>,
    pub matched_entries: Vec<Entry>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.matched_entries.is_empty()
    }

    /// The `n`th matched day (1-based), oldest first.
    pub fn nth_date(&self, n: usize) -> Option<NaiveDate> {
        n.checked_sub(1)
            .and_then(|i| self.matched_dates.iter().nth(i).copied())
    }
}

#[derive(Debug, Default)]
pub struct SearchController {
    last: Option<SearchResult>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&mut self, index: &EntryIndex<'_>, text: &str) -> &SearchResult {
        let matched_entries: Vec<Entry> = index.search(text).into_iter().cloned().collect();
        let matched_dates = matched_entries.iter().map(|e| e.date).collect();
        debug!(
            "event=search module=search status=ok matches={}",
            matched_entries.len()
        );
        self.last.insert(SearchResult {
            query: text.to_string(),
            matched_dates,
            matched_entries,
        })
    }

    /// Moves the cursor to `date`. Any day may be selected, matched or not.
    pub fn select(&self, date: NaiveDate, cursor: &mut DateCursor) {
        cursor.set_date(date);
    }

    /// Moves the cursor to the `n`th matched day of the last query.
    pub fn select_nth(&self, n: usize, cursor: &mut DateCursor) -> Result<NaiveDate> {
        let result = self
            .last
            .as_ref()
            .ok_or_else(|| JournalError::Api("No search has been run".to_string()))?;
        let date = result.nth_date(n).ok_or_else(|| {
            JournalError::Api(format!(
                "Match {} not found ({} matching days)",
                n,
                result.matched_dates.len()
            ))
        })?;
        self.select(date, cursor);
        Ok(date)
    }
}

/// Parses `MM/DD/YYYY`. Month and day may omit their leading zero; the year is
/// exactly four digits.
pub fn parse_user_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    let parts: Vec<&str> = trimmed.split('/').collect();
    let malformed = || JournalError::Parse(format!("{:?} is not a MM/DD/YYYY date", text));

    let &[month, day, year] = parts.as_slice() else {
        return Err(malformed());
    };
    let is_digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.chars().all(|c| c.is_ascii_digit())
    };
    if !is_digits(month, 1, 2) || !is_digits(day, 1, 2) || !is_digits(year, 4, 4) {
        return Err(malformed());
    }

    let month: u32 = month.parse().map_err(|_| malformed())?;
    let day: u32 = day.parse().map_err(|_| malformed())?;
    let year: i32 = year.parse().map_err(|_| malformed())?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| JournalError::Parse(format!("{:?} is not a calendar date", text)))
}

/// Accepts `MM/DD/YYYY` or ISO `YYYY-MM-DD`.
pub fn parse_any_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.contains('/') {
        return parse_user_date(trimmed);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        JournalError::Parse(format!(
            "{:?} is neither a MM/DD/YYYY nor a YYYY-MM-DD date",
            text
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::entry_store::fixtures::{noon, StoreFixture};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> StoreFixture {
        StoreFixture::new()
            .with_entry("Walk", "Long walk by the river", noon(2024, 5, 10))
            .with_entry("Work", "Deadline stress", noon(2024, 5, 11))
            .with_entry("River", "Went back to the river", noon(2024, 5, 3))
    }

    #[test]
    fn query_collects_dates_and_entries() {
        let fixture = sample();
        let mut search = SearchController::new();
        let result = search.query(&fixture.store.index(), "RIVER");

        let titles: Vec<_> = result.matched_entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Walk", "River"]);
        let dates: Vec<_> = result.matched_dates.iter().copied().collect();
        assert_eq!(dates, vec![day(2024, 5, 3), day(2024, 5, 10)]);
    }

    #[test]
    fn empty_query_returns_nothing() {
        let fixture = sample();
        let mut search = SearchController::new();
        let result = search.query(&fixture.store.index(), "");
        assert!(result.is_empty());
        assert!(result.matched_dates.is_empty());
    }

    #[test]
    fn selecting_a_match_moves_the_cursor() {
        let fixture = sample();
        let mut search = SearchController::new();
        let mut cursor = DateCursor::new(day(2024, 1, 1));

        search.query(&fixture.store.index(), "river");
        assert_eq!(search.select_nth(2, &mut cursor).unwrap(), day(2024, 5, 10));
        assert_eq!(cursor.current(), day(2024, 5, 10));

        assert!(search.select_nth(3, &mut cursor).is_err());
        assert!(search.select_nth(0, &mut cursor).is_err());
        assert_eq!(cursor.current(), day(2024, 5, 10));
    }

    #[test]
    fn select_nth_without_query_fails() {
        let search = SearchController::new();
        let mut cursor = DateCursor::new(day(2024, 1, 1));
        assert!(search.select_nth(1, &mut cursor).is_err());
        assert_eq!(cursor.current(), day(2024, 1, 1));
    }

    #[test]
    fn parses_user_dates() {
        assert_eq!(parse_user_date("02/29/2024").unwrap(), day(2024, 2, 29));
        assert_eq!(parse_user_date(" 3/7/2025 ").unwrap(), day(2025, 3, 7));
    }

    #[test]
    fn rejects_malformed_user_dates() {
        for input in [
            "",
            "today",
            "13/01/2024",
            "02/30/2023",
            "2024-02-29",
            "02/29/24",
            "02/29/2024/1",
            "aa/bb/cccc",
            "+1/02/2024",
        ] {
            assert!(
                matches!(parse_user_date(input), Err(JournalError::Parse(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn parse_any_date_accepts_iso() {
        assert_eq!(parse_any_date("2024-02-29").unwrap(), day(2024, 2, 29));
        assert_eq!(parse_any_date("02/29/2024").unwrap(), day(2024, 2, 29));
        assert!(parse_any_date("2024-13-01").is_err());
        assert!(parse_any_date("soon").is_err());
    }
}
