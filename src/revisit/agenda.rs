//! Groups indexed items the way they are presented: active items split by
//! urgency, then the archive and the mastered list.

use crate::index::{DisplayIndex, DisplayItem};
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Overdue,
    DueToday,
    Upcoming,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct Agenda {
    pub overdue: Vec<DisplayItem>,
    pub due_today: Vec<DisplayItem>,
    pub upcoming: Vec<DisplayItem>,
    pub archived: Vec<DisplayItem>,
    pub mastered: Vec<DisplayItem>,
}

impl Agenda {
    pub fn is_empty(&self) -> bool {
        self.overdue.is_empty()
            && self.due_today.is_empty()
            && self.upcoming.is_empty()
            && self.archived.is_empty()
            && self.mastered.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.overdue.len() + self.due_today.len() + self.upcoming.len()
    }
}

/// Whole calendar days from `now` until `date`, in `now`'s time zone.
///
/// Negative when `date` falls on an earlier day, zero on the same day.
pub fn days_until<Tz: TimeZone>(date: DateTime<Utc>, now: &DateTime<Tz>) -> i64 {
    let target = date.with_timezone(&now.timezone()).date_naive();
    (target - now.date_naive()).num_days()
}

pub fn urgency<Tz: TimeZone>(next_revision_date: DateTime<Utc>, now: &DateTime<Tz>) -> Urgency {
    match days_until(next_revision_date, now) {
        d if d < 0 => Urgency::Overdue,
        0 => Urgency::DueToday,
        _ => Urgency::Upcoming,
    }
}

/// Splits an indexed collection (as produced by
/// [`index_items`](crate::index::index_items)) into agenda sections, keeping
/// the order within each section.
pub fn build_agenda<Tz: TimeZone>(indexed: Vec<DisplayItem>, now: &DateTime<Tz>) -> Agenda {
    let mut agenda = Agenda::default();
    for dp in indexed {
        match dp.index {
            DisplayIndex::Active(_) => match urgency(dp.item.next_revision_date, now) {
                Urgency::Overdue => agenda.overdue.push(dp),
                Urgency::DueToday => agenda.due_today.push(dp),
                Urgency::Upcoming => agenda.upcoming.push(dp),
            },
            DisplayIndex::Archived(_) => agenda.archived.push(dp),
            DisplayIndex::Mastered(_) => agenda.mastered.push(dp),
        }
    }
    agenda
}
