use crate::commands::helpers::{apply_to_items, missing_message};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ARCHIVE_RETENTION_DAYS;
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Moves active items to the archive, freezing their progress.
///
/// Archived items are dropped by the sweep once their retention period runs
/// out. Mastered and already archived items are left alone.
pub fn run<S: DataStore>(store: &mut S, ids: &[Uuid], now: DateTime<Utc>) -> Result<CmdResult> {
    let applied = apply_to_items(store, ids, |item| item.archive(now))?;
    let mut result = CmdResult::default();

    for item in &applied.changed {
        tracing::debug!(id = %item.id, "Archived item");
        result.add_message(CmdMessage::success(format!(
            "Archived: {} (auto-deletes in {} days)",
            item.title, ARCHIVE_RETENTION_DAYS
        )));
    }
    for item in &applied.skipped {
        result.add_message(CmdMessage::warning(format!(
            "Only active items can be archived: {}",
            item.title
        )));
    }
    for id in &applied.missing {
        result.add_message(missing_message(id));
    }

    Ok(result.with_affected_items(applied.changed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::restore;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 4, 18, 0, 0).unwrap()
    }

    #[test]
    fn archives_active_item() {
        let mut store = StoreFixture::new(t0()).with_active("Topic").build();
        let id = store.items()[0].id;

        let res = run(&mut store, &[id], t0() + Duration::hours(2)).unwrap();

        assert_eq!(res.affected_items.len(), 1);
        assert_eq!(
            store.items()[0].archived_at(),
            Some(t0() + Duration::hours(2))
        );
        assert!(res.messages[0].content.contains("Archived: Topic"));
    }

    #[test]
    fn archive_then_restore_is_identity() {
        let mut store = StoreFixture::new(t0())
            .with_active("Keep")
            .with_active("Other")
            .build();
        let before = store.items().to_vec();
        let id = before[0].id;

        run(&mut store, &[id], t0() + Duration::days(1)).unwrap();
        assert!(store.items()[0].is_archived());
        restore::run(&mut store, &[id]).unwrap();

        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn mastered_item_is_not_archived() {
        let mut store = StoreFixture::new(t0()).with_mastered("Done").build();
        let id = store.items()[0].id;

        let res = run(&mut store, &[id], t0()).unwrap();

        assert!(res.affected_items.is_empty());
        assert!(res.has_warnings());
        assert!(store.items()[0].is_mastered());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn rearchiving_keeps_original_timestamp() {
        let mut store = StoreFixture::new(t0())
            .with_archived("Parked", t0())
            .build();
        let id = store.items()[0].id;

        run(&mut store, &[id], t0() + Duration::days(3)).unwrap();
        assert_eq!(store.items()[0].archived_at(), Some(t0()));
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut store = StoreFixture::new(t0()).with_active("Topic").build();
        let res = run(&mut store, &[Uuid::new_v4()], t0()).unwrap();
        assert!(res.messages[0].content.contains("No item with id"));
        assert_eq!(store.save_count(), 0);
    }
}
