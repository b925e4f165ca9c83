//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Every `render_*` function returns a
//! `String` so it can be tested without a terminal; `print_*` functions write to
//! stdout.

use chrono::{Datelike, Local, NaiveDate, Utc};
use colored::Colorize;
use daybook::api::{CmdMessage, MonthView};
use daybook::config::{JournalConfig, CONFIG_KEYS};
use daybook::index::{match_segments, DisplayEntry, MatchSegment};
use daybook::model::Entry;
use daybook::notify::{MessageLevel, Notice};
use daybook::search::SearchResult;
use std::io::{IsTerminal, Write};
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const CONTENT_INDENT: &str = "       ";
const EMPTY_DAY: &str = "No entries for this day.";

/// The day header followed by its numbered entries.
pub fn render_day(date: NaiveDate, entries: &[DisplayEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", format_day_heading(date).bold()));
    if entries.is_empty() {
        out.push_str(&format!("  {}\n", EMPTY_DAY.dimmed()));
        return out;
    }

    for de in entries {
        out.push('\n');
        let idx_str = format!("{:>4}. ", de.index);
        let time_ago = format_time_ago(&de.entry);
        let available = LINE_WIDTH.saturating_sub(idx_str.width() + TIME_WIDTH);
        let title = truncate_to_width(&de.entry.title, available);
        let padding = available.saturating_sub(title.width());
        out.push_str(&format!(
            "{}{}{}{}\n",
            idx_str.yellow(),
            title.bold(),
            " ".repeat(padding),
            time_ago.dimmed()
        ));
        for line in de.entry.content.lines() {
            out.push_str(&format!("{}{}\n", CONTENT_INDENT, line));
        }
    }
    out
}

/// Matching entries with the query highlighted, then the numbered matching days
/// that `--pick` refers to.
pub fn render_search(result: &SearchResult) -> String {
    let mut out = String::new();
    if result.is_empty() {
        return out;
    }

    let mut by_date: Vec<&Entry> = result.matched_entries.iter().collect();
    by_date.sort_by_key(|e| e.date);
    for entry in by_date {
        out.push_str(&format!(
            "{}  {}\n",
            entry.date.to_string().dimmed(),
            highlight(&entry.title, &result.query).bold()
        ));
        let preview: String = entry
            .content
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let preview = truncate_to_width(&preview, LINE_WIDTH.saturating_sub(12));
        out.push_str(&format!("            {}\n", highlight(&preview, &result.query)));
    }

    out.push('\n');
    let days: Vec<String> = result
        .matched_dates
        .iter()
        .enumerate()
        .map(|(i, date)| format!("{}. {}", i + 1, date))
        .collect();
    out.push_str(&format!("{} {}\n", "Days:".bold(), days.join("  ")));
    out
}

/// A Monday-first month grid. Days with entries are marked, `selected` is
/// highlighted.
pub fn render_calendar(view: &MonthView, selected: Option<NaiveDate>) -> String {
    let mut out = String::new();
    let Some(first) = view.first() else {
        return out;
    };
    out.push_str(&format!("{}\n", first.format("%B %Y").to_string().bold()));
    out.push_str(&format!("{}\n", " Mo  Tu  We  Th  Fr  Sa  Su".dimmed()));

    let offset = first.weekday().num_days_from_monday() as usize;
    let mut line = "    ".repeat(offset);
    for (date, count) in &view.days {
        let marker = if *count > 0 { "*" } else { " " };
        let cell = format!("{:>3}{}", date.day(), marker);
        let cell = if Some(*date) == selected {
            cell.reversed().to_string()
        } else if *count > 0 {
            cell.green().to_string()
        } else {
            cell
        };
        line.push_str(&cell);
        if date.weekday().num_days_from_monday() == 6 {
            out.push_str(line.trim_end());
            out.push('\n');
            line.clear();
        }
    }
    if !line.is_empty() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn render_config(config: &JournalConfig) -> String {
    let mut out = String::new();
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            out.push_str(&format!("{} = {}\n", key, value));
        }
    }
    out
}

/// Notices are rendered as one-line toasts: `title: description`.
pub fn render_notices(notices: &[Notice]) -> String {
    let mut out = String::new();
    for notice in notices {
        let text = format!("{}: {}", notice.title, notice.description);
        let line = match notice.level {
            MessageLevel::Info => text.dimmed(),
            MessageLevel::Success => text.green(),
            MessageLevel::Warning => text.yellow(),
            MessageLevel::Error => text.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub fn print_notices(notices: &[Notice]) {
    print!("{}", render_notices(notices));
}

/// Prints `text` one character at a time, `delay_ms` apart. Prints at once when
/// the delay is zero or stdout is not a terminal.
pub fn print_revealed(text: &str, delay_ms: u64) {
    let mut stdout = std::io::stdout();
    if delay_ms == 0 || !stdout.is_terminal() {
        println!("{}", text);
        return;
    }
    for c in text.chars() {
        print!("{}", c);
        let _ = stdout.flush();
        std::thread::sleep(Duration::from_millis(delay_ms));
    }
    println!();
}

fn format_day_heading(date: NaiveDate) -> String {
    let mut heading = date.format("%A, %B %-d, %Y").to_string();
    if date == Local::now().date_naive() {
        heading.push_str(" (today)");
    }
    heading
}

fn highlight(text: &str, query: &str) -> String {
    match_segments(text, query)
        .into_iter()
        .map(|segment| match segment {
            MatchSegment::Plain(s) => s,
            MatchSegment::Match(s) => s.yellow().bold().to_string(),
        })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(entry: &Entry) -> String {
    let Some(created) = entry.created_at_utc() else {
        return " ".repeat(TIME_WIDTH);
    };
    let duration = Utc::now().signed_duration_since(created);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
