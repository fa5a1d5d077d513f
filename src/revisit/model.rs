use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::days_after;

/// Review gaps (in days) used when an item carries no schedule of its own.
pub const DEFAULT_INTERVALS: [u32; 5] = [1, 3, 7, 14, 30];

/// How long an archived item is kept before the sweep drops it.
pub const ARCHIVE_RETENTION_DAYS: i64 = 7;

/// Lifecycle state of an item.
///
/// An item is either in the review rotation, parked in the archive, or done.
/// Archived and mastered are exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Active,
    Archived { at: DateTime<Utc> },
    Mastered { at: DateTime<Utc> },
}

/// One topic being tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredItem", into = "StoredItem")]
pub struct RevisionItem {
    pub id: Uuid,
    pub title: String,
    pub level: usize,
    pub revision_intervals: Option<Vec<u32>>,
    pub last_revision_date: DateTime<Utc>,
    pub next_revision_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub state: ItemState,
}

impl RevisionItem {
    /// Creates a fresh item at level 0, first review `intervals[0]` days from `now`.
    ///
    /// Callers validate `intervals` first; an empty list schedules the first
    /// review for `now`.
    pub fn new(title: String, intervals: Vec<u32>, now: DateTime<Utc>) -> Self {
        let first_gap = intervals.first().copied().unwrap_or(0);
        Self {
            id: Uuid::new_v4(),
            title,
            level: 0,
            revision_intervals: Some(intervals),
            last_revision_date: now,
            next_revision_date: days_after(now, first_gap),
            created_at: now,
            state: ItemState::Active,
        }
    }

    /// The schedule this item follows: its own, or `default` when it has none.
    pub fn schedule_or<'a>(&'a self, default: &'a [u32]) -> &'a [u32] {
        match &self.revision_intervals {
            Some(intervals) if !intervals.is_empty() => intervals,
            _ => default,
        }
    }

    pub fn schedule(&self) -> &[u32] {
        self.schedule_or(&DEFAULT_INTERVALS)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ItemState::Active)
    }

    pub fn is_archived(&self) -> bool {
        matches!(self.state, ItemState::Archived { .. })
    }

    pub fn is_mastered(&self) -> bool {
        matches!(self.state, ItemState::Mastered { .. })
    }

    pub fn archived_at(&self) -> Option<DateTime<Utc>> {
        match self.state {
            ItemState::Archived { at } => Some(at),
            _ => None,
        }
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        match self.state {
            ItemState::Mastered { at } => Some(at),
            _ => None,
        }
    }

    /// When the retention sweep may drop this item, if it is archived.
    pub fn deletion_deadline(&self) -> Option<DateTime<Utc>> {
        self.archived_at()
            .and_then(|at| at.checked_add_signed(Duration::days(ARCHIVE_RETENTION_DAYS)))
    }

    /// True once an archived item has reached its deletion deadline.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.deletion_deadline()
            .is_some_and(|deadline| now >= deadline)
    }

    /// Moves an active item to the archive. Returns whether anything changed.
    pub fn archive(&mut self, now: DateTime<Utc>) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state = ItemState::Archived { at: now };
        true
    }

    /// Brings an archived item back into rotation with its progress intact.
    pub fn restore(&mut self) -> bool {
        if !self.is_archived() {
            return false;
        }
        self.state = ItemState::Active;
        true
    }

    /// Replaces the title with the trimmed input. Blank input is ignored.
    pub fn rename(&mut self, title: &str) -> bool {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.title = trimmed.to_string();
        true
    }
}

// On-disk record. Field names and the two optional timestamps match the
// collection format written by earlier versions of the tracker.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredItem {
    id: Uuid,
    title: String,
    level: usize,
    last_revision_date: DateTime<Utc>,
    next_revision_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    revision_intervals: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    archived_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

impl From<StoredItem> for RevisionItem {
    fn from(stored: StoredItem) -> Self {
        // archivedAt wins when both are present
        let state = match (stored.archived_at, stored.completed_at) {
            (Some(at), _) => ItemState::Archived { at },
            (None, Some(at)) => ItemState::Mastered { at },
            (None, None) => ItemState::Active,
        };
        Self {
            id: stored.id,
            title: stored.title,
            level: stored.level,
            revision_intervals: stored.revision_intervals,
            last_revision_date: stored.last_revision_date,
            next_revision_date: stored.next_revision_date,
            created_at: stored.created_at,
            state,
        }
    }
}

impl From<RevisionItem> for StoredItem {
    fn from(item: RevisionItem) -> Self {
        let archived_at = item.archived_at();
        let completed_at = item.completed_at();
        Self {
            id: item.id,
            title: item.title,
            level: item.level,
            last_revision_date: item.last_revision_date,
            next_revision_date: item.next_revision_date,
            created_at: item.created_at,
            revision_intervals: item.revision_intervals,
            archived_at,
            completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn new_item_schedules_first_interval() {
        let item = RevisionItem::new("Topic".into(), vec![2, 5], t0());
        assert_eq!(item.level, 0);
        assert!(item.is_active());
        assert_eq!(item.created_at, t0());
        assert_eq!(item.last_revision_date, t0());
        assert_eq!(item.next_revision_date, t0() + Duration::days(2));
    }

    #[test]
    fn new_item_with_huge_first_gap_does_not_overflow() {
        let item = RevisionItem::new("Topic".into(), vec![4_000_000_000], t0());
        assert_eq!(
            item.next_revision_date,
            t0() + Duration::days(i64::from(crate::schedule::MAX_INTERVAL_DAYS))
        );
    }

    #[test]
    fn empty_schedule_falls_back_to_default() {
        let mut item = RevisionItem::new("Topic".into(), vec![1], t0());
        item.revision_intervals = Some(vec![]);
        assert_eq!(item.schedule(), &DEFAULT_INTERVALS);
        item.revision_intervals = None;
        assert_eq!(item.schedule_or(&[4, 8]), &[4, 8]);
    }

    #[test]
    fn archive_only_applies_to_active_items() {
        let mut item = RevisionItem::new("Topic".into(), vec![1], t0());
        assert!(item.archive(t0()));
        assert!(!item.archive(t0() + Duration::days(1)));
        assert_eq!(item.archived_at(), Some(t0()));

        let mut mastered = RevisionItem::new("Done".into(), vec![1], t0());
        mastered.state = ItemState::Mastered { at: t0() };
        assert!(!mastered.archive(t0()));
        assert!(mastered.is_mastered());
    }

    #[test]
    fn restore_requires_archived_item() {
        let mut item = RevisionItem::new("Topic".into(), vec![1], t0());
        assert!(!item.restore());
        item.archive(t0());
        assert!(item.restore());
        assert!(item.is_active());
    }

    #[test]
    fn rename_trims_and_rejects_blank() {
        let mut item = RevisionItem::new("Topic".into(), vec![1], t0());
        assert!(!item.rename("   "));
        assert_eq!(item.title, "Topic");
        assert!(item.rename("  Better title "));
        assert_eq!(item.title, "Better title");
    }

    #[test]
    fn deletion_deadline_is_seven_days_after_archive() {
        let mut item = RevisionItem::new("Topic".into(), vec![1], t0());
        assert_eq!(item.deletion_deadline(), None);
        item.archive(t0());
        assert_eq!(item.deletion_deadline(), Some(t0() + Duration::days(7)));
        assert!(!item.is_expired(t0() + Duration::days(7) - Duration::seconds(1)));
        assert!(item.is_expired(t0() + Duration::days(7)));
    }

    #[test]
    fn decodes_stored_records() {
        let json = r#"{
            "id": "9b2f7c1e-8a51-4c1e-9d1a-6f0f3b0e2a11",
            "title": "Graphs",
            "level": 2,
            "lastRevisionDate": "2024-03-01T09:00:00.000Z",
            "nextRevisionDate": "2024-03-08T09:00:00.000Z",
            "createdAt": "2024-02-20T09:00:00.000Z",
            "revisionIntervals": [1, 3, 7],
            "archivedAt": "2024-03-02T09:00:00.000Z"
        }"#;
        let item: RevisionItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "Graphs");
        assert_eq!(item.level, 2);
        assert_eq!(
            item.archived_at(),
            Some(Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap())
        );
    }

    #[test]
    fn archived_wins_over_completed_in_stored_records() {
        let json = r#"{
            "id": "9b2f7c1e-8a51-4c1e-9d1a-6f0f3b0e2a11",
            "title": "Both",
            "level": 3,
            "lastRevisionDate": "2024-03-01T09:00:00Z",
            "nextRevisionDate": "2024-03-01T09:00:00Z",
            "createdAt": "2024-02-20T09:00:00Z",
            "archivedAt": "2024-03-02T09:00:00Z",
            "completedAt": "2024-03-01T09:00:00Z"
        }"#;
        let item: RevisionItem = serde_json::from_str(json).unwrap();
        assert!(item.is_archived());
        assert_eq!(item.revision_intervals, None);
    }

    #[test]
    fn encodes_optional_timestamps_only_when_set() {
        let mut item = RevisionItem::new("Topic".into(), vec![1, 2], t0());
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("archivedAt").is_none());
        assert!(value.get("completedAt").is_none());
        assert_eq!(value["revisionIntervals"], serde_json::json!([1, 2]));

        item.state = ItemState::Mastered { at: t0() };
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("completedAt").is_some());
        assert!(value.get("archivedAt").is_none());
    }
}
