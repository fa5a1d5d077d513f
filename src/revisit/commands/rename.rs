use crate::commands::helpers::{apply_to_items, missing_message};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

/// Replaces an item's title with the trimmed `title`.
///
/// Blank titles are rejected. Archived and mastered items can be renamed as
/// well as active ones.
pub fn run<S: DataStore>(store: &mut S, id: Uuid, title: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if title.trim().is_empty() {
        result.add_message(CmdMessage::warning("Title cannot be empty, nothing changed."));
        return Ok(result);
    }

    let mut old_title = None;
    let applied = apply_to_items(store, &[id], |item| {
        old_title = Some(item.title.clone());
        item.rename(title)
    })?;

    for item in &applied.changed {
        result.add_message(CmdMessage::success(format!(
            "Renamed: {} -> {}",
            old_title.as_deref().unwrap_or_default(),
            item.title
        )));
    }
    for id in &applied.missing {
        result.add_message(missing_message(id));
    }

    Ok(result.with_affected_items(applied.changed))
}
