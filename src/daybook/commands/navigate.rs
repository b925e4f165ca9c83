use crate::commands::CmdResult;
use crate::cursor::DateCursor;
use crate::error::Result;
use crate::store::{EntryStore, StorageBackend};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Next,
    Prev,
    To(NaiveDate),
}

/// Moves the cursor and lists the day it lands on.
pub fn run<B: StorageBackend>(
    store: &EntryStore<B>,
    cursor: &mut DateCursor,
    step: Move,
) -> Result<CmdResult> {
    let date = match step {
        Move::Next => cursor.next()?,
        Move::Prev => cursor.prev()?,
        Move::To(date) => {
            cursor.set_date(date);
            date
        }
    };
    Ok(super::day::run(store, date))
}
