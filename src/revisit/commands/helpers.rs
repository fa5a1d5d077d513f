use crate::commands::CmdMessage;
use crate::error::Result;
use crate::index::{index_items, DisplayItem, ItemSelector};
use crate::model::RevisionItem;
use crate::store::DataStore;
use std::collections::HashSet;
use uuid::Uuid;

/// Outcome of applying a mutation to a set of ids.
#[derive(Debug, Default)]
pub struct Applied {
    /// Items the mutation changed, in their new state
    pub changed: Vec<RevisionItem>,
    /// Items found but left as they were
    pub skipped: Vec<RevisionItem>,
    /// Ids that matched nothing
    pub missing: Vec<Uuid>,
}

pub fn indexed_items<S: DataStore>(store: &S) -> Result<Vec<DisplayItem>> {
    let items = store.load_items()?;
    Ok(index_items(&items))
}

/// Runs `apply` on every item whose id is in `ids` and persists the collection
/// if at least one call reported a change.
///
/// Duplicate ids are applied once. Item order is never touched.
pub fn apply_to_items<S, F>(store: &mut S, ids: &[Uuid], mut apply: F) -> Result<Applied>
where
    S: DataStore,
    F: FnMut(&mut RevisionItem) -> bool,
{
    let mut items = store.load_items()?;
    let mut applied = Applied::default();
    let mut seen = HashSet::new();

    for id in ids {
        if !seen.insert(*id) {
            continue;
        }
        match items.iter_mut().find(|item| item.id == *id) {
            Some(item) => {
                if apply(item) {
                    applied.changed.push(item.clone());
                } else {
                    applied.skipped.push(item.clone());
                }
            }
            None => applied.missing.push(*id),
        }
    }

    if !applied.changed.is_empty() {
        store.save_items(&items)?;
    }
    Ok(applied)
}

/// Drops every item matching `remove` and persists if anything went.
///
/// Returns the removed items; survivors keep their relative order.
pub fn remove_items<S, F>(store: &mut S, mut remove: F) -> Result<Vec<RevisionItem>>
where
    S: DataStore,
    F: FnMut(&RevisionItem) -> bool,
{
    let items = store.load_items()?;
    let (removed, kept): (Vec<_>, Vec<_>) = items.into_iter().partition(|item| remove(item));

    if !removed.is_empty() {
        store.save_items(&kept)?;
    }
    Ok(removed)
}

pub fn missing_message(id: &Uuid) -> CmdMessage {
    CmdMessage::warning(format!("No item with id {}", id))
}

/// Resolves selectors against the current collection.
///
/// Selectors that match nothing are reported as warnings instead of failing
/// the whole command. The same item selected twice is returned once.
pub fn resolve_selectors<S: DataStore>(
    store: &S,
    selectors: &[ItemSelector],
) -> Result<(Vec<DisplayItem>, Vec<CmdMessage>)> {
    let indexed = indexed_items(store)?;
    let mut resolved: Vec<DisplayItem> = Vec::new();
    let mut warnings = Vec::new();

    for selector in selectors {
        let found = indexed.iter().find(|dp| match selector {
            ItemSelector::Index(idx) => dp.index == *idx,
            ItemSelector::Id(id) => dp.item.id == *id,
        });
        match found {
            Some(dp) => {
                if !resolved.iter().any(|r| r.item.id == dp.item.id) {
                    resolved.push(dp.clone());
                }
            }
            None => warnings.push(match selector {
                ItemSelector::Index(idx) => {
                    CmdMessage::warning(format!("Index {} not found", idx))
                }
                ItemSelector::Id(id) => missing_message(id),
            }),
        }
    }

    Ok((resolved, warnings))
}
