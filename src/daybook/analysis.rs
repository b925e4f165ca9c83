//! Placeholder analysis of a day's writing.
//!
//! There is no real analysis: [`StaticAnalyzer`] returns the same text for any
//! non-empty set of entries. The [`Analyzer`] trait is the seam where a real
//! collaborator would plug in.

use crate::error::{JournalError, Result};
use crate::model::Entry;

pub const PLACEHOLDER_ANALYSIS: &str = "Based on your entries, it seems you're feeling reflective today. Your writing shows a pattern of introspective thinking...";

pub trait Analyzer {
    /// Fails with [`JournalError::NothingToAnalyze`] when `entries` is empty.
    fn analyze(&self, entries: &[&Entry]) -> Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StaticAnalyzer;

impl Analyzer for StaticAnalyzer {
    fn analyze(&self, entries: &[&Entry]) -> Result<String> {
        if entries.is_empty() {
            return Err(JournalError::NothingToAnalyze);
        }
        Ok(PLACEHOLDER_ANALYSIS.to_string())
    }
}
