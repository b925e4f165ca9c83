use crate::error::{JournalError, Result};
use crate::index::{number_entries, DisplayEntry};
use crate::store::{EntryStore, StorageBackend};
use chrono::NaiveDate;

/// The entries of `date`, numbered from 1 in the order they were written.
pub fn day_entries<B: StorageBackend>(store: &EntryStore<B>, date: NaiveDate) -> Vec<DisplayEntry> {
    number_entries(store.index().by_date(date))
}

/// Resolves a 1-based position on `date` to its entry.
pub fn entry_on_day<B: StorageBackend>(
    store: &EntryStore<B>,
    date: NaiveDate,
    index: usize,
) -> Result<DisplayEntry> {
    let entries = day_entries(store, date);
    let count = entries.len();
    entries
        .into_iter()
        .find(|de| de.index == index)
        .ok_or_else(|| {
            JournalError::Api(format!(
                "Entry {} not found on {} ({} entries that day)",
                index, date, count
            ))
        })
}
