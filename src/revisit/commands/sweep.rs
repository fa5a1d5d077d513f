//! Retention sweep: archived items are kept for
//! [`ARCHIVE_RETENTION_DAYS`](crate::model::ARCHIVE_RETENTION_DAYS) and then
//! dropped. There is no timer; callers run the sweep once per load.

use crate::commands::helpers::remove_items;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use chrono::{DateTime, Utc};

pub fn run<S: DataStore>(store: &mut S, now: DateTime<Utc>) -> Result<CmdResult> {
    let purged = remove_items(store, |item| item.is_expired(now))?;
    let mut result = CmdResult::default();

    if !purged.is_empty() {
        tracing::debug!(count = purged.len(), "Swept expired archived items");
        for item in &purged {
            result.add_message(CmdMessage::info(format!(
                "Auto-deleted archived item: {}",
                item.title
            )));
        }
    }

    Ok(result.with_affected_items(purged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::archive;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap()
    }

    fn archived_store() -> crate::store::memory::InMemoryStore {
        let mut store = StoreFixture::new(t0()).with_active("Topic").build();
        let id = store.items()[0].id;
        archive::run(&mut store, &[id], t0()).unwrap();
        store
    }

    #[test]
    fn keeps_item_within_retention() {
        let mut store = archived_store();
        let saves = store.save_count();

        let res = run(&mut store, t0() + Duration::days(6)).unwrap();

        assert_eq!(store.items().len(), 1);
        assert!(res.affected_items.is_empty());
        assert_eq!(store.save_count(), saves);
    }

    #[test]
    fn drops_item_after_retention() {
        let mut store = archived_store();

        let res = run(&mut store, t0() + Duration::days(8)).unwrap();

        assert!(store.items().is_empty());
        assert_eq!(res.affected_items.len(), 1);
        assert!(res.messages[0].content.contains("Topic"));
    }

    #[test]
    fn deadline_boundary_is_inclusive() {
        let deadline = t0() + Duration::days(7);

        let mut store = archived_store();
        run(&mut store, deadline - Duration::milliseconds(1)).unwrap();
        assert_eq!(store.items().len(), 1);

        run(&mut store, deadline).unwrap();
        assert!(store.items().is_empty());
    }

    #[test]
    fn never_drops_unarchived_items() {
        let mut store = StoreFixture::new(t0() - Duration::days(400))
            .with_active("Ancient")
            .with_mastered("Done long ago")
            .with_archived("Fresh archive", t0())
            .with_archived("Stale archive", t0() - Duration::days(30))
            .build();

        run(&mut store, t0()).unwrap();

        let titles: Vec<_> = store.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Ancient", "Done long ago", "Fresh archive"]);
        assert_eq!(store.save_count(), 1);
    }
}
