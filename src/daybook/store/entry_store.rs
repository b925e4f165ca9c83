use super::backend::StorageBackend;
use crate::error::{JournalError, Result};
use crate::index::EntryIndex;
use crate::model::{validate_title_and_content, Entry, EntryPatch};
use log::{debug, info, warn};

pub const DEFAULT_STORAGE_KEY: &str = "journal-sections";

/// Owner of the entry collection.
///
/// The collection is read once from its slot when the store is opened and kept in
/// insertion order. Every mutation builds the next collection in a buffer, writes
/// it to the backend, and only then replaces the in-memory view, so a failed write
/// leaves both sides at the previous state.
pub struct EntryStore<B: StorageBackend> {
    backend: B,
    key: String,
    entries: Vec<Entry>,
}

impl<B: StorageBackend> EntryStore<B> {
    /// Opens the store and loads the persisted collection.
    /// A missing, unreadable or corrupt slot yields an empty collection.
    pub fn open(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = read_entries(&backend, &key);
        Self {
            backend,
            key,
            entries,
        }
    }

    /// Re-reads the persisted collection, replacing the in-memory view.
    pub fn load(&mut self) -> &[Entry] {
        self.entries = read_entries(&self.backend, &self.key);
        &self.entries
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn index(&self) -> EntryIndex<'_> {
        EntryIndex::new(&self.entries)
    }

    /// Appends a new entry and persists the collection.
    pub fn append(&mut self, entry: Entry) -> Result<&[Entry]> {
        validate_title_and_content(&entry.title, &entry.content)?;
        if self.get(&entry.id).is_some() {
            return Err(JournalError::Validation(format!(
                "An entry with id {} already exists",
                entry.id
            )));
        }

        let id = entry.id.clone();
        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.extend_from_slice(&self.entries);
        next.push(entry);
        self.persist(next)?;

        info!(
            "event=entry_append module=store status=ok id={} count={}",
            id,
            self.entries.len()
        );
        Ok(&self.entries)
    }

    /// Applies `patch` to the entry with `id` and persists the collection.
    ///
    /// An unknown id is a no-op that returns the collection unchanged.
    pub fn update_by_id(&mut self, id: &str, patch: &EntryPatch) -> Result<&[Entry]> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(validation_error());
            }
        }
        if let Some(content) = &patch.content {
            if content.trim().is_empty() {
                return Err(validation_error());
            }
        }

        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            debug!("event=entry_update module=store status=skipped reason=unknown_id id={id}");
            return Ok(&self.entries);
        };

        let updated = patch.apply(&self.entries[pos]);
        validate_title_and_content(&updated.title, &updated.content)?;

        let mut next = self.entries.clone();
        next[pos] = updated;
        self.persist(next)?;

        info!("event=entry_update module=store status=ok id={id}");
        Ok(&self.entries)
    }

    fn persist(&mut self, next: Vec<Entry>) -> Result<()> {
        let payload = serde_json::to_string(&next)?;
        if let Err(e) = self.backend.set(&self.key, &payload) {
            warn!(
                "event=entry_persist module=store status=error key={} error={}",
                self.key, e
            );
            return Err(e);
        }
        self.entries = next;
        Ok(())
    }
}

fn validation_error() -> JournalError {
    JournalError::Validation(crate::model::MISSING_FIELDS_MESSAGE.to_string())
}

fn read_entries<B: StorageBackend>(backend: &B, key: &str) -> Vec<Entry> {
    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("event=entry_load module=store status=recovered reason=read_error key={key} error={e}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Entry>>(&raw) {
        Ok(entries) => {
            debug!(
                "event=entry_load module=store status=ok key={key} count={}",
                entries.len()
            );
            entries
        }
        Err(e) => {
            warn!("event=entry_load module=store status=recovered reason=corrupt_payload key={key} error={e}");
            Vec::new()
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use chrono::{DateTime, TimeZone, Utc};

    /// Noon UTC on the given day.
    pub fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    pub struct StoreFixture {
        pub store: EntryStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: EntryStore::open(MemBackend::new(), DEFAULT_STORAGE_KEY),
            }
        }

        pub fn with_entry(mut self, title: &str, content: &str, now: DateTime<Utc>) -> Self {
            let entry = Entry::new(title.to_string(), content.to_string(), &now);
            self.store.append(entry).unwrap();
            self
        }

        pub fn with_entries_on(mut self, count: usize, now: DateTime<Utc>) -> Self {
            for i in 0..count {
                let entry = Entry::new(
                    format!("Entry {}", i + 1),
                    format!("Content for entry {}", i + 1),
                    &now,
                );
                self.store.append(entry).unwrap();
            }
            self
        }
    }
}
