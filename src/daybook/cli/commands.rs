//! # CLI Dispatch
//!
//! - `run()`: parses arguments, builds the context and dispatches
//! - `init_context()`: resolves the data directory, loads config, starts logging and
//!   opens the store
//! - `handle_*()`: per-command handlers that call the API and print the result

use super::render::{
    print_messages, print_notices, print_revealed, render_calendar, render_config, render_day,
    render_search,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use daybook::api::{CmdResult, ConfigAction, JournalApi};
use daybook::config::JournalConfig;
use daybook::editor::external::edit_draft;
use daybook::editor::Draft;
use daybook::error::{JournalError, Result};
use daybook::logging::init_logging;
use daybook::model::EntryPatch;
use daybook::store::fs_backend::FsBackend;
use daybook::store::EntryStore;
use directories::ProjectDirs;
use log::{debug, warn};
use std::path::PathBuf;

const DATA_DIR_ENV: &str = "DAYBOOK_HOME";
const LOG_DIR_NAME: &str = "logs";

struct AppContext {
    api: JournalApi<FsBackend>,
    config: JournalConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Today) => handle_today(&mut ctx),
        Some(Commands::Show { date }) => handle_show(&mut ctx, date),
        Some(Commands::Next) => handle_move(&mut ctx, |api| api.next_day()),
        Some(Commands::Prev) => handle_move(&mut ctx, |api| api.prev_day()),
        Some(Commands::Goto { date }) => handle_move(&mut ctx, |api| api.goto(&date)),
        Some(Commands::New {
            title,
            content,
            no_editor,
        }) => handle_new(&mut ctx, title, content, no_editor),
        Some(Commands::Edit {
            index,
            title,
            content,
        }) => handle_edit(&mut ctx, index, title, content),
        Some(Commands::Search { query, pick }) => handle_search(&mut ctx, query.join(" "), pick),
        Some(Commands::Calendar { month }) => handle_calendar(&mut ctx, month),
        Some(Commands::Analyze) => handle_analyze(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_show(&mut ctx, None),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "daybook", "daybook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| JournalError::Api("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = data_dir()?;
    let (config, config_error) = match JournalConfig::load(&dir) {
        Ok(config) => (config, None),
        Err(e) => (JournalConfig::default(), Some(e)),
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    if let Err(e) = init_logging(level, &dir.join(LOG_DIR_NAME)) {
        if cli.verbose {
            eprintln!("Warning: logging disabled: {}", e);
        }
    }
    if let Some(e) = config_error {
        warn!("event=config_load module=cli status=recovered reason=unreadable error={e}");
    }
    debug!(
        "event=startup module=cli status=ok data_dir={} key={}",
        dir.display(),
        config.storage_key
    );

    let store = EntryStore::open(FsBackend::new(dir.clone()), config.storage_key.clone());
    let api = JournalApi::new(store, dir);
    Ok(AppContext { api, config })
}

fn print_day(result: &CmdResult) {
    if let Some(date) = result.date {
        print!("{}", render_day(date, &result.listed_entries));
    }
}

fn handle_today(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.today()?;
    print_day(&result);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, date: Option<String>) -> Result<()> {
    let result = match date {
        Some(text) => ctx.api.show(&text)?,
        None => ctx.api.current_day()?,
    };
    print_day(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_move<F>(ctx: &mut AppContext, step: F) -> Result<()>
where
    F: FnOnce(&mut JournalApi<FsBackend>) -> Result<CmdResult>,
{
    let result = step(&mut ctx.api)?;
    print_day(&result);
    Ok(())
}

fn handle_new(
    ctx: &mut AppContext,
    title: Option<String>,
    content: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let (title, content) = match (title, content) {
        (Some(title), Some(content)) => (title, content),
        (title, content) if no_editor => (title.unwrap_or_default(), content.unwrap_or_default()),
        (title, content) => {
            let initial = Draft {
                title: title.unwrap_or_default(),
                content: content.unwrap_or_default(),
            };
            let edited = edit_draft(&initial)?;
            (edited.title, edited.content)
        }
    };

    let result = ctx.api.create_entry(title, content)?;
    print_notices(&result.notices);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    index: usize,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let patch = if title.is_none() && content.is_none() {
        let initial = ctx.api.begin_edit(index)?;
        let edited = match edit_draft(&initial) {
            Ok(edited) => edited,
            Err(e) => {
                ctx.api.cancel_edit();
                return Err(e);
            }
        };
        if edited == initial {
            let result = ctx.api.cancel_edit();
            print_notices(&result.notices);
            return Ok(());
        }
        EntryPatch::new(edited.title, edited.content)
    } else {
        EntryPatch { title, content }
    };

    let result = ctx.api.edit_entry(index, patch)?;
    print_notices(&result.notices);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: String, pick: Option<usize>) -> Result<()> {
    let result = ctx.api.search(&query, pick)?;
    if let Some(found) = &result.search {
        print!("{}", render_search(found));
    }
    print_messages(&result.messages);
    if pick.is_some() {
        println!();
        print_day(&result);
    }
    Ok(())
}

fn handle_calendar(ctx: &mut AppContext, month: Option<String>) -> Result<()> {
    let result = ctx.api.calendar(month.as_deref())?;
    if let Some(view) = &result.calendar {
        print!("{}", render_calendar(view, Some(ctx.api.current_date())));
    }
    Ok(())
}

fn handle_analyze(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.analyze()?;
    if let Some(text) = &result.analysis {
        print_revealed(text, ctx.config.reveal_ms);
    }
    print_notices(&result.notices);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if key.is_none() {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
