use crate::commands::helpers::resolve_selectors;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::ItemSelector;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, selectors: &[ItemSelector]) -> Result<CmdResult> {
    let (items, warnings) = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default().with_listed_items(items);
    for warning in warnings {
        result.add_message(warning);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::{TimeZone, Utc};

    #[test]
    fn shows_selected_items_with_warnings_for_unknown() {
        let now = Utc.with_ymd_and_hms(2024, 3, 3, 3, 3, 3).unwrap();
        let store = StoreFixture::new(now)
            .with_active("One")
            .with_mastered("Done")
            .build();

        let res = run(
            &store,
            &[
                ItemSelector::Index(DisplayIndex::Mastered(1)),
                ItemSelector::Index(DisplayIndex::Archived(1)),
            ],
        )
        .unwrap();

        assert_eq!(res.listed_items.len(), 1);
        assert_eq!(res.listed_items[0].item.title, "Done");
        assert!(res.has_warnings());
        assert!(res.messages[0].content.contains("a1"));
    }
}
