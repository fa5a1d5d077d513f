//! # Rendering
//!
//! Turns command results into terminal text. Every function returns a
//! `String` so output can be checked in tests; the handlers do the printing.
//!
//! Layout math (widths, truncation, padding) is done on plain text first and
//! colors are applied afterwards, so ANSI codes never throw the columns off.

use chrono::{DateTime, Local, TimeZone, Utc};
use colored::*;
use revisit::agenda::{days_until, Agenda};
use revisit::api::{CmdMessage, MessageLevel};
use revisit::config::{RevisitConfig, KEYS};
use revisit::index::{DisplayIndex, DisplayItem};
use revisit::model::{ItemState, RevisionItem};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
pub const INDEX_WIDTH: usize = 6;
pub const STATUS_WIDTH: usize = 28;
pub const TIME_WIDTH: usize = 14;

const EMPTY_MESSAGE: &str = "No revisions yet. Add one with: revisit add <title>";

/// Dates and schedules need the clock and the user's preferences.
pub struct RenderContext<'a, Tz: TimeZone> {
    pub now: &'a DateTime<Tz>,
    pub config: &'a RevisitConfig,
}

pub fn render_agenda<Tz: TimeZone>(agenda: &Agenda, ctx: &RenderContext<'_, Tz>) -> String {
    if agenda.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE.dimmed());
    }

    let sections: [(&str, &[DisplayItem], Color); 5] = [
        ("Overdue", agenda.overdue.as_slice(), Color::Red),
        ("Due Today", agenda.due_today.as_slice(), Color::Yellow),
        ("Upcoming", agenda.upcoming.as_slice(), Color::Cyan),
        ("Archived", agenda.archived.as_slice(), Color::BrightBlack),
        ("Mastered", agenda.mastered.as_slice(), Color::Green),
    ];

    let mut out = String::new();
    for (heading, items, color) in sections {
        if items.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        let heading = format!("{} ({})", heading, items.len());
        let _ = writeln!(out, "{}", heading.color(color).bold());
        for dp in items {
            let _ = writeln!(out, "{}", render_line(dp, ctx));
        }
    }
    out
}

fn render_line<Tz: TimeZone>(dp: &DisplayItem, ctx: &RenderContext<'_, Tz>) -> String {
    let index = format!("{}.", dp.index);
    let index = format!("{:>width$} ", index, width = INDEX_WIDTH);
    let status = status_label(&dp.item, ctx);
    let time_ago = format_time_ago(dp.item.created_at);

    let fixed = index.width() + STATUS_WIDTH + TIME_WIDTH + 2;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let title = truncate_to_width(&dp.item.title, available);
    let padding = available.saturating_sub(title.width());
    let status = format!("{:<width$}", status, width = STATUS_WIDTH);

    let (index, title, status) = match dp.index {
        DisplayIndex::Active(_) => (index.normal(), title.normal(), status.normal()),
        DisplayIndex::Archived(_) => (index.dimmed(), title.dimmed(), status.dimmed()),
        DisplayIndex::Mastered(_) => (index.green(), title.normal(), status.green()),
    };

    format!(
        "{}{}{}  {}{}",
        index,
        title,
        " ".repeat(padding),
        status,
        time_ago.dimmed()
    )
}

/// The one-line state summary shown next to each item.
pub fn status_label<Tz: TimeZone>(item: &RevisionItem, ctx: &RenderContext<'_, Tz>) -> String {
    match item.state {
        ItemState::Active => {
            let days = days_until(item.next_revision_date, ctx.now);
            match days {
                d if d < 0 => format!("Overdue by {}", plural_days(-d)),
                0 => "Due today".to_string(),
                d => format!("Due in {}", plural_days(d)),
            }
        }
        ItemState::Archived { .. } => {
            let days = item
                .deletion_deadline()
                .map(|deadline| days_until(deadline, ctx.now))
                .unwrap_or_default();
            if days < 1 {
                "Auto-deletes today".to_string()
            } else {
                format!("Auto-deletes in {}", plural_days(days))
            }
        }
        ItemState::Mastered { at } => {
            format!("Mastered on {}", format_date(at, &ctx.config.date_format))
        }
    }
}

/// Full detail view used by `show`.
pub fn render_full_items<Tz: TimeZone>(items: &[DisplayItem], ctx: &RenderContext<'_, Tz>) -> String {
    let mut out = String::new();
    let fmt = &ctx.config.date_format;

    for (i, dp) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let item = &dp.item;
        let schedule = item.schedule_or(&ctx.config.default_intervals);

        let _ = writeln!(out, "{} {}", dp.index.to_string().yellow(), item.title.bold());
        let _ = writeln!(out, "  {:<10}{}", "Status:", status_label(item, ctx));
        let _ = writeln!(out, "  {:<10}Level {}/{}", "Progress:", item.level, schedule.len());
        let _ = writeln!(
            out,
            "  {:<10}{} days",
            "Schedule:",
            format_schedule(schedule, item.level)
        );
        if let ItemState::Archived { at } = item.state {
            let _ = writeln!(out, "  {:<10}{}", "Archived:", format_date(at, fmt));
        }
        if item.is_active() {
            let _ = writeln!(
                out,
                "  {:<10}{}",
                "Next:",
                format_date(item.next_revision_date, fmt)
            );
        }
        let _ = writeln!(
            out,
            "  {:<10}{}",
            "Last:",
            format_date(item.last_revision_date, fmt)
        );
        let _ = writeln!(
            out,
            "  {:<10}{} ({})",
            "Created:",
            format_date(item.created_at, fmt),
            format_time_ago(item.created_at).trim()
        );
        let _ = writeln!(out, "  {:<10}{}", "Id:", item.id.to_string().dimmed());
    }
    out
}

/// Schedule as `1 3 [7] 14 30`, the bracketed step being the next gap.
///
/// A mastered item has no current step, so nothing is highlighted.
pub fn format_schedule(schedule: &[u32], level: usize) -> String {
    schedule
        .iter()
        .enumerate()
        .map(|(i, days)| {
            if i == level {
                format!("[{}]", days).bold().to_string()
            } else {
                days.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_config(config: &RevisitConfig) -> String {
    let mut out = String::new();
    for key in KEYS {
        let value = config.get(key).unwrap_or_default();
        let _ = writeln!(out, "{} = {}", key.bold(), value);
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
        let _ = writeln!(out, "{}", line);
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Formats an instant in local time with a user-supplied chrono format.
///
/// Falls back to ISO dates when the format cannot be rendered.
pub fn format_date(date: DateTime<Utc>, format: &str) -> String {
    let local = date.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(format)).is_err() {
        return local.format("%Y-%m-%d").to_string();
    }
    out
}

fn plural_days(n: i64) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
