use crate::commands::helpers::{missing_message, remove_items};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

/// Permanently removes items, whatever their state.
pub fn run<S: DataStore>(store: &mut S, ids: &[Uuid]) -> Result<CmdResult> {
    let removed = remove_items(store, |item| ids.contains(&item.id))?;
    let mut result = CmdResult::default();

    for item in &removed {
        tracing::debug!(id = %item.id, "Deleted item");
        result.add_message(CmdMessage::success(format!("Deleted: {}", item.title)));
    }
    for id in ids {
        if !removed.iter().any(|item| item.id == *id) {
            result.add_message(missing_message(id));
        }
    }

    Ok(result.with_affected_items(removed))
}
