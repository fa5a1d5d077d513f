use crate::commands::helpers::remove_items;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Removes every mastered item. Active and archived items keep their order.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let removed = remove_items(store, |item| item.is_mastered())?;
    let mut result = CmdResult::default();

    if removed.is_empty() {
        result.add_message(CmdMessage::info("No mastered items to clear."));
    } else {
        tracing::debug!(count = removed.len(), "Cleared mastered items");
        result.add_message(CmdMessage::success(format!(
            "Cleared {} mastered item{}",
            removed.len(),
            if removed.len() == 1 { "" } else { "s" }
        )));
    }

    Ok(result.with_affected_items(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::{DateTime, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn removes_only_mastered_items() {
        let mut store = StoreFixture::new(t0())
            .with_active("A")
            .with_mastered("M1")
            .with_archived("B", t0())
            .with_mastered("M2")
            .with_active("C")
            .build();

        let res = run(&mut store).unwrap();

        assert_eq!(res.affected_items.len(), 2);
        assert!(res.messages[0].content.contains("Cleared 2 mastered items"));
        let titles: Vec<_> = store.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn nothing_to_clear_does_not_write() {
        let mut store = StoreFixture::new(t0()).with_active("A").build();
        let res = run(&mut store).unwrap();
        assert!(res.messages[0].content.contains("No mastered items"));
        assert_eq!(store.save_count(), 0);
    }
}
