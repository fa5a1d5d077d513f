//! # Scheduler
//!
//! Review progression for a single item. Each item walks through its interval
//! schedule one step per completed review:
//!
//! ```text
//! level:      0 ──review──▶ 1 ──review──▶ 2 ... ──review──▶ len (mastered)
//! next date:  now+s[0]      now+s[1]      now+s[2]          now
//! ```
//!
//! Reaching `level == len(schedule)` is terminal: the item becomes
//! [`ItemState::Mastered`] and further reviews are ignored.

use crate::model::{ItemState, RevisionItem};
use chrono::{DateTime, Duration, Utc};

/// What a completed review did to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    Rescheduled {
        level: usize,
        next_revision_date: DateTime<Utc>,
    },
    Mastered {
        level: usize,
    },
    /// The item was archived or already mastered; nothing changed.
    Ignored,
}

/// Longest gap a schedule may hold, roughly a century.
pub const MAX_INTERVAL_DAYS: u32 = 36_500;

pub fn days(n: u32) -> Duration {
    Duration::days(i64::from(n))
}

/// `now` moved forward by `n` days, with `n` capped at [`MAX_INTERVAL_DAYS`].
pub fn days_after(now: DateTime<Utc>, n: u32) -> DateTime<Utc> {
    now.checked_add_signed(days(n.min(MAX_INTERVAL_DAYS)))
        .unwrap_or(now)
}

/// Records a completed review at `now`.
///
/// `default_schedule` applies to items that carry no schedule of their own.
pub fn complete_review(
    item: &mut RevisionItem,
    default_schedule: &[u32],
    now: DateTime<Utc>,
) -> ReviewOutcome {
    if !item.is_active() {
        return ReviewOutcome::Ignored;
    }

    let schedule = item.schedule_or(default_schedule);
    let new_level = item.level + 1;

    if new_level >= schedule.len() {
        item.level = schedule.len();
        item.last_revision_date = now;
        item.next_revision_date = now;
        item.state = ItemState::Mastered { at: now };
        return ReviewOutcome::Mastered { level: item.level };
    }

    let next_revision_date = days_after(now, schedule[new_level]);
    item.level = new_level;
    item.last_revision_date = now;
    item.next_revision_date = next_revision_date;

    ReviewOutcome::Rescheduled {
        level: new_level,
        next_revision_date,
    }
}

/// A schedule is usable when it has at least one step and every gap is
/// between 1 and [`MAX_INTERVAL_DAYS`].
pub fn is_valid_schedule(intervals: &[u32]) -> bool {
    !intervals.is_empty()
        && intervals
            .iter()
            .all(|&d| (1..=MAX_INTERVAL_DAYS).contains(&d))
}

/// Parses a comma-separated day list such as `"1, 3, 7"`.
///
/// Tokens that are not positive integers are dropped, so the result may be
/// empty; callers treat an empty schedule as "nothing to add".
pub fn parse_intervals(input: &str) -> Vec<u32> {
    input
        .split(',')
        .filter_map(|token| token.trim().parse::<u32>().ok())
        .filter(|&d| d > 0)
        .collect()
}

/// Renders a schedule back into the `"1, 3, 7"` form accepted by [`parse_intervals`].
pub fn format_intervals(intervals: &[u32]) -> String {
    intervals
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
