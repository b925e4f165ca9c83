//! # Entry Index
//!
//! Read-only projections over the entry collection: the entries of one day, full-text
//! matches, and the set of days that have anything written.
//!
//! An [`EntryIndex`] borrows the store's slice, so it can never drift from the
//! authoritative collection: build a new one after every mutation.
//!
//! ## Display numbering
//!
//! Users refer to entries by their position within a day: the first entry written on a
//! day is `1`, the next `2`, and so on. [`number_entries`] assigns these, in insertion
//! order, so the numbers stay stable while new entries are appended.

use crate::model::Entry;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// A segment of text in a search match, either plain text or a matched term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSegment {
    Plain(String),
    Match(String),
}

/// An entry paired with its 1-based position within its day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub index: usize,
    pub entry: Entry,
}

pub struct EntryIndex<'a> {
    entries: &'a [Entry],
}

impl<'a> EntryIndex<'a> {
    pub fn new(entries: &'a [Entry]) -> Self {
        Self { entries }
    }

    /// All entries written on `date`, in insertion order.
    pub fn by_date(&self, date: NaiveDate) -> Vec<&'a Entry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    /// Case-insensitive substring match over title and content.
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&'a Entry> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = fold_case(query);
        self.entries
            .iter()
            .filter(|e| {
                fold_case(&e.title).contains(&needle) || fold_case(&e.content).contains(&needle)
            })
            .collect()
    }

    pub fn dates_with_entries(&self) -> BTreeSet<NaiveDate> {
        self.entries.iter().map(|e| e.date).collect()
    }

    pub fn count_by_date(&self) -> BTreeMap<NaiveDate, usize> {
        let mut counts = BTreeMap::new();
        for entry in self.entries {
            *counts.entry(entry.date).or_insert(0) += 1;
        }
        counts
    }
}

/// Numbers one day's entries from 1.
pub fn number_entries(entries: Vec<&Entry>) -> Vec<DisplayEntry> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| DisplayEntry {
            index: i + 1,
            entry: entry.clone(),
        })
        .collect()
}

/// Lowercases char-by-char, keeping one output char per input char so that
/// char positions line up between the original and the folded text.
fn fold_case(s: &str) -> String {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Splits `text` into plain and matched segments for highlighting.
pub fn match_segments(text: &str, query: &str) -> Vec<MatchSegment> {
    let original: Vec<char> = text.chars().collect();
    let folded: Vec<char> = fold_case(text).chars().collect();
    let needle: Vec<char> = fold_case(query).chars().collect();

    if needle.is_empty() || query.trim().is_empty() {
        return vec![MatchSegment::Plain(text.to_string())];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    while i + needle.len() <= folded.len() {
        if folded[i..i + needle.len()] == needle[..] {
            if plain_start < i {
                segments.push(MatchSegment::Plain(original[plain_start..i].iter().collect()));
            }
            segments.push(MatchSegment::Match(
                original[i..i + needle.len()].iter().collect(),
            ));
            i += needle.len();
            plain_start = i;
        } else {
            i += 1;
        }
    }
    if plain_start < original.len() {
        segments.push(MatchSegment::Plain(original[plain_start..].iter().collect()));
    }
    segments
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
            .with_entry("Morning", "Felt good", noon(2024, 3, 1))
            .with_entry("Lunch", "Ate noodles", noon(2024, 3, 2))
            .with_entry("Evening", "Felt tired, GOOD day", noon(2024, 3, 1))
    }

    #[test]
    fn by_date_returns_matching_subset_in_order() {
        let fixture = sample();
        let index = fixture.store.index();
        let titles: Vec<_> = index
            .by_date(day(2024, 3, 1))
            .into_iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Morning", "Evening"]);
    }

    #[test]
    fn by_date_without_entries_is_empty() {
        let fixture = sample();
        assert!(fixture.store.index().by_date(day(2024, 3, 3)).is_empty());
    }

    #[test]
    fn empty_query_matches_nothing() {
        let fixture = sample();
        let index = fixture.store.index();
        assert!(index.search("").is_empty());
        assert!(index.search("   ").is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_content() {
        let fixture = sample();
        let index = fixture.store.index();

        let titles: Vec<_> = index.search("good").into_iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Morning", "Evening"]);

        let titles: Vec<_> = index.search("LUNCH").into_iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Lunch"]);

        assert!(index.search("breakfast").is_empty());
    }

    #[test]
    fn dates_and_counts() {
        let fixture = sample();
        let index = fixture.store.index();
        let dates: Vec<_> = index.dates_with_entries().into_iter().collect();
        assert_eq!(dates, vec![day(2024, 3, 1), day(2024, 3, 2)]);

        let counts = index.count_by_date();
        assert_eq!(counts[&day(2024, 3, 1)], 2);
        assert_eq!(counts[&day(2024, 3, 2)], 1);
    }

    #[test]
    fn numbering_starts_at_one() {
        let fixture = sample();
        let numbered = number_entries(fixture.store.index().by_date(day(2024, 3, 1)));
        assert_eq!(numbered[0].index, 1);
        assert_eq!(numbered[1].index, 2);
        assert_eq!(numbered[1].entry.title, "Evening");
    }

    #[test]
    fn segments_preserve_original_case() {
        let segments = match_segments("Felt Good, good day", "GOOD");
        assert_eq!(
            segments,
            vec![
                MatchSegment::Plain("Felt ".into()),
                MatchSegment::Match("Good".into()),
                MatchSegment::Plain(", ".into()),
                MatchSegment::Match("good".into()),
                MatchSegment::Plain(" day".into()),
            ]
        );
    }

    #[test]
    fn segments_without_match_are_plain() {
        assert_eq!(
            match_segments("nothing here", "zzz"),
            vec![MatchSegment::Plain("nothing here".into())]
        );
    }
}
