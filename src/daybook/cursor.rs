use crate::error::{JournalError, Result};
use crate::store::StorageBackend;
use chrono::{Local, NaiveDate};
use log::warn;

pub const CURSOR_KEY: &str = "journal-cursor";

/// The day currently on display.
///
/// Arithmetic is done on `NaiveDate`, a plain calendar date with no time or zone, so
/// moving by one day can never skip or repeat a day around DST changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCursor {
    current: NaiveDate,
}

impl DateCursor {
    pub fn new(date: NaiveDate) -> Self {
        Self { current: date }
    }

    /// A cursor on the local calendar day.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn current(&self) -> NaiveDate {
        self.current
    }

    pub fn next(&mut self) -> Result<NaiveDate> {
        self.current = self
            .current
            .succ_opt()
            .ok_or_else(|| JournalError::DateOutOfRange(format!("no day after {}", self.current)))?;
        Ok(self.current)
    }

    pub fn prev(&mut self) -> Result<NaiveDate> {
        self.current = self
            .current
            .pred_opt()
            .ok_or_else(|| JournalError::DateOutOfRange(format!("no day before {}", self.current)))?;
        Ok(self.current)
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.current = date;
    }

    /// Restores the cursor from its slot, falling back to today when the slot is
    /// missing or unreadable.
    pub fn load<B: StorageBackend>(backend: &B) -> Self {
        match backend.get(CURSOR_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<NaiveDate>(&raw) {
                Ok(date) => Self::new(date),
                Err(e) => {
                    warn!("event=cursor_load module=cursor status=recovered reason=corrupt_payload error={e}");
                    Self::today()
                }
            },
            Ok(None) => Self::today(),
            Err(e) => {
                warn!("event=cursor_load module=cursor status=recovered reason=read_error error={e}");
                Self::today()
            }
        }
    }

    pub fn save<B: StorageBackend>(&self, backend: &B) -> Result<()> {
        let payload = serde_json::to_string(&self.current)?;
        backend.set(CURSOR_KEY, &payload)
    }
}

impl Default for DateCursor {
    fn default() -> Self {
        Self::today()
    }
}
