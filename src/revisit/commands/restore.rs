use crate::commands::helpers::{apply_to_items, missing_message};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

/// Returns archived items to the review rotation with their progress intact.
pub fn run<S: DataStore>(store: &mut S, ids: &[Uuid]) -> Result<CmdResult> {
    let applied = apply_to_items(store, ids, |item| item.restore())?;
    let mut result = CmdResult::default();

    for item in &applied.changed {
        tracing::debug!(id = %item.id, "Restored item");
        result.add_message(CmdMessage::success(format!("Restored: {}", item.title)));
    }
    for item in &applied.skipped {
        result.add_message(CmdMessage::info(format!("Not archived: {}", item.title)));
    }
    for id in &applied.missing {
        result.add_message(missing_message(id));
    }

    Ok(result.with_affected_items(applied.changed))
}
