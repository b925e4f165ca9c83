use crate::commands::{CmdMessage, CmdResult};
use crate::cursor::DateCursor;
use crate::error::Result;
use crate::search::SearchController;
use crate::store::{EntryStore, StorageBackend};

use super::helpers::day_entries;

/// Runs `query`; with `pick`, also moves the cursor to that matched day (1-based,
/// oldest first) and lists it.
pub fn run<B: StorageBackend>(
    store: &EntryStore<B>,
    controller: &mut SearchController,
    cursor: &mut DateCursor,
    query: &str,
    pick: Option<usize>,
) -> Result<CmdResult> {
    let found = controller.query(&store.index(), query).clone();
    let mut result = CmdResult::default();

    if query.trim().is_empty() {
        result.add_message(CmdMessage::info("Type something to search for."));
    } else if found.is_empty() {
        result.add_message(CmdMessage::info(format!("No entries match \"{}\".", query)));
    }

    if let Some(n) = pick {
        let date = controller.select_nth(n, cursor)?;
        result.date = Some(date);
        result.listed_entries = day_entries(store, date);
    }

    result.search = Some(found);
    Ok(result)
}
