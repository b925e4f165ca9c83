use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "daybook", bin_name = "daybook", version)]
#[command(about = "A day-by-day journal for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Jump to today and list its entries
    #[command(display_order = 1)]
    Today,

    /// List a day's entries (the current day if omitted)
    #[command(alias = "ls", display_order = 2)]
    Show {
        /// MM/DD/YYYY or YYYY-MM-DD
        date: Option<String>,
    },

    /// Move to the next day
    #[command(display_order = 3)]
    Next,

    /// Move to the previous day
    #[command(display_order = 4)]
    Prev,

    /// Move to a given day
    #[command(display_order = 5)]
    Goto {
        /// MM/DD/YYYY or YYYY-MM-DD
        date: String,
    },

    /// Write a new entry
    #[command(alias = "n", display_order = 10)]
    New {
        title: Option<String>,

        content: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Edit an entry of the current day
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// Position of the entry within the day (1 is the first written)
        index: usize,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New content
        #[arg(long)]
        content: Option<String>,
    },

    /// Search titles and contents
    #[command(alias = "s", display_order = 20)]
    Search {
        /// Search terms (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Jump to the Nth matching day (oldest first)
        #[arg(long, value_name = "N")]
        pick: Option<usize>,
    },

    /// Show a month with the days that have entries
    #[command(alias = "cal", display_order = 21)]
    Calendar {
        /// Month as YYYY-MM (defaults to the current day's month)
        #[arg(long)]
        month: Option<String>,
    },

    /// Analyze the current day's entries
    #[command(display_order = 22)]
    Analyze,

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (storage-key, reveal-ms, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
