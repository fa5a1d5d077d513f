use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RevisionItem;
use crate::schedule::{is_valid_schedule, MAX_INTERVAL_DAYS};
use crate::store::DataStore;
use chrono::{DateTime, Utc};

/// Appends a new item with the given schedule.
///
/// A blank title or an unusable schedule leaves the collection untouched.
pub fn run<S: DataStore>(
    store: &mut S,
    title: &str,
    intervals: Vec<u32>,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let title = title.trim();

    if title.is_empty() {
        result.add_message(CmdMessage::warning("Title cannot be empty, nothing added."));
        return Ok(result);
    }
    if !is_valid_schedule(&intervals) {
        result.add_message(CmdMessage::warning(format!(
            "Schedule needs intervals between 1 and {} days, nothing added.",
            MAX_INTERVAL_DAYS
        )));
        return Ok(result);
    }

    let item = RevisionItem::new(title.to_string(), intervals, now);
    let mut items = store.load_items()?;
    items.push(item.clone());
    store.save_items(&items)?;

    tracing::debug!(id = %item.id, "Added item");
    result.add_message(CmdMessage::success(format!("Added: {}", item.title)));
    result.affected_items.push(item);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_INTERVALS;
    use crate::schedule::days;
    use crate::store::memory::InMemoryStore;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 2, 7, 15, 0).unwrap()
    }

    #[test]
    fn adds_item_at_level_zero() {
        let mut store = InMemoryStore::new();
        let res = run(&mut store, "Topic A", DEFAULT_INTERVALS.to_vec(), t0()).unwrap();

        assert_eq!(res.affected_items.len(), 1);
        let item = &store.items()[0];
        assert_eq!(item.title, "Topic A");
        assert_eq!(item.level, 0);
        assert_eq!(item.revision_intervals, Some(DEFAULT_INTERVALS.to_vec()));
        assert_eq!(item.created_at, t0());
        assert_eq!(item.last_revision_date, t0());
        assert_eq!(item.next_revision_date, t0() + days(1));
        assert!(item.is_active());
    }

    #[test]
    fn appends_in_insertion_order() {
        let mut store = InMemoryStore::new();
        run(&mut store, "First", vec![5], t0()).unwrap();
        run(&mut store, "Second", vec![1], t0()).unwrap();

        let titles: Vec<_> = store.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn trims_title() {
        let mut store = InMemoryStore::new();
        run(&mut store, "  Spaced  ", vec![2], t0()).unwrap();
        assert_eq!(store.items()[0].title, "Spaced");
    }

    #[test]
    fn blank_title_is_a_no_op() {
        let mut store = InMemoryStore::new();
        let res = run(&mut store, "  ", vec![1, 2], t0()).unwrap();

        assert!(store.items().is_empty());
        assert_eq!(store.save_count(), 0);
        assert!(res.affected_items.is_empty());
        assert!(res.has_warnings());
    }

    #[test]
    fn empty_schedule_is_a_no_op() {
        let mut store = InMemoryStore::new();
        let res = run(&mut store, "X", vec![], t0()).unwrap();
        assert!(store.items().is_empty());
        assert!(res.has_warnings());

        run(&mut store, "X", vec![1, 0], t0()).unwrap();
        assert!(store.items().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn oversized_interval_is_a_no_op() {
        let mut store = InMemoryStore::new();
        let intervals = crate::schedule::parse_intervals("4000000000");
        assert_eq!(intervals, vec![4_000_000_000]);

        let res = run(&mut store, "X", intervals, t0()).unwrap();
        assert!(store.items().is_empty());
        assert_eq!(store.save_count(), 0);
        assert!(res.messages[0].content.contains("between 1 and"));
    }
}
