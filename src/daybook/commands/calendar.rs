use crate::commands::CmdResult;
use crate::error::{JournalError, Result};
use crate::store::{EntryStore, StorageBackend};
use chrono::{Datelike, NaiveDate};

/// One month of days with their entry counts, for the calendar view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// Every day of the month in order, paired with how many entries it holds.
    pub days: Vec<(NaiveDate, usize)>,
}

impl MonthView {
    pub fn first(&self) -> Option<NaiveDate> {
        self.days.first().map(|(date, _)| *date)
    }

    pub fn has_entries(&self, date: NaiveDate) -> bool {
        self.days.iter().any(|(d, count)| *d == date && *count > 0)
    }
}

/// Builds the month containing `day`; `day` becomes the result's date.
pub fn run<B: StorageBackend>(store: &EntryStore<B>, day: NaiveDate) -> Result<CmdResult> {
    let first = day
        .with_day(1)
        .ok_or_else(|| JournalError::DateOutOfRange(format!("no month around {}", day)))?;
    let counts = store.index().count_by_date();

    let mut days = Vec::new();
    let mut cursor = Some(first);
    while let Some(date) = cursor.filter(|d| d.month() == first.month()) {
        days.push((date, counts.get(&date).copied().unwrap_or(0)));
        cursor = date.succ_opt();
    }

    let mut result = CmdResult::default().with_date(day);
    result.calendar = Some(MonthView {
        year: first.year(),
        month: first.month(),
        days,
    });
    Ok(result)
}
