use crate::commands::CmdResult;
use crate::store::{EntryStore, StorageBackend};
use chrono::NaiveDate;

use super::helpers::day_entries;

pub fn run<B: StorageBackend>(store: &EntryStore<B>, date: NaiveDate) -> CmdResult {
    CmdResult::default()
        .with_date(date)
        .with_listed_entries(day_entries(store, date))
}
