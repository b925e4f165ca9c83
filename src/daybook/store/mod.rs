//! # Storage Layer
//!
//! Storage is split in two:
//!
//! - [`backend::StorageBackend`]: the **port**. A key-value store of named slots, each
//!   holding one string. This is all daybook asks of persistence.
//! - [`entry_store::EntryStore`]: the **owner** of the entry collection. It reads one
//!   slot on open, keeps the authoritative `Vec<Entry>` in memory and rewrites the whole
//!   slot on every mutation.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per slot in a data directory,
//!   written atomically (temp file + rename).
//! - [`mem_backend::MemBackend`]: in-memory slots for testing, with write-failure
//!   simulation.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── journal-sections.json   # JSON array of entries
//! ├── journal-cursor.json     # the currently viewed day
//! ├── config.json             # configuration
//! └── logs/
//! ```

pub mod backend;
pub mod entry_store;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use entry_store::{EntryStore, DEFAULT_STORAGE_KEY};
