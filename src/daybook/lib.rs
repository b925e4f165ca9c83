//! # Daybook Architecture
//!
//! Daybook is a **UI-agnostic journaling library**: dated entries, browsed one day at a
//! time, searchable, with a placeholder "analysis" of a day's writing. The `daybook`
//! binary is one client of it; nothing below the CLI layer knows about a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, the date cursor and the editor state     │
//! │  - Dispatches to commands, persists the cursor              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns `CmdResult`                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Components                                                 │
//! │  EntryStore · EntryIndex · EditorState · DateCursor         │
//! │  SearchController · Analyzer                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage port (store/backend.rs)                            │
//! │  - `get`/`set` of named slots                               │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//!
//! The entry collection lives in exactly one place, [`store::EntryStore`]. Everything else
//! borrows it: [`index::EntryIndex`] is a view over `&[Entry]`, and the editor routes its
//! commits through the store's `append` / `update_by_id`.
//!
//! Entries are never deleted. There is no delete operation anywhere in the library.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage port, backends and the entry store
//! - [`model`]: `Entry` and `EntryPatch`
//! - [`index`]: Per-day grouping and full-text matching
//! - [`editor`]: Draft state machine and external editor integration
//! - [`cursor`]: The currently viewed day
//! - [`search`]: Search controller and user date parsing
//! - [`analysis`]: Placeholder analysis
//! - [`notify`]: Notification collaborator
//! - [`config`]: Configuration
//! - [`logging`]: File logging bootstrap
//! - [`error`]: Error types

pub mod analysis;
pub mod api;
pub mod commands;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod notify;
pub mod search;
pub mod store;
