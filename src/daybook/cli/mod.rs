//! # CLI Behavior
//!
//! This is **one possible UI client** for daybook. The CLI is the only place that
//! knows about terminal I/O, exit codes, and output formatting.
//!
//! ## The Day Under the Cursor
//!
//! Daybook remembers which day you were looking at. `daybook` with no arguments shows
//! that day; `next`, `prev`, `goto` and `today` move it. `edit` and `analyze` act on
//! it, so `daybook goto 02/29/2024 && daybook edit 1 --content "..."` edits the first
//! entry of that day.
//!
//! ## Writing
//!
//! `daybook new "Title" "Content"` saves straight away. Leave either argument out
//! and `$EDITOR` opens on a buffer whose first line is the title and the rest the
//! content. `--no-editor` never opens an editor, so missing fields are an error.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
