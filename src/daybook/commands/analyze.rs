use crate::analysis::Analyzer;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::notify::{Notice, Notifier};
use crate::store::{EntryStore, StorageBackend};
use chrono::NaiveDate;
use log::info;

/// Analyzes the entries of `date`. An empty day is an error and raises no notice.
pub fn run<B: StorageBackend>(
    store: &EntryStore<B>,
    analyzer: &dyn Analyzer,
    date: NaiveDate,
) -> Result<CmdResult> {
    let index = store.index();
    let entries = index.by_date(date);
    let text = analyzer.analyze(&entries)?;
    info!(
        "event=analyze module=commands status=ok date={} entries={}",
        date,
        entries.len()
    );

    let mut result = CmdResult::default().with_date(date);
    result.notify(Notice::success(
        "Analysis complete",
        "AI has analyzed your entries",
    ));
    result.analysis = Some(text);
    Ok(result)
}
