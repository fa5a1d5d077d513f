use crate::commands::helpers::{apply_to_items, missing_message};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::schedule::{complete_review, ReviewOutcome};
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Records a completed review for each id.
///
/// Archived and mastered items are left alone; `default_schedule` applies to
/// items that carry no schedule of their own.
pub fn run<S: DataStore>(
    store: &mut S,
    ids: &[Uuid],
    default_schedule: &[u32],
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut outcomes = Vec::new();

    let applied = apply_to_items(store, ids, |item| {
        let outcome = complete_review(item, default_schedule, now);
        outcomes.push((item.id, outcome));
        outcome != ReviewOutcome::Ignored
    })?;

    for item in &applied.changed {
        let outcome = outcomes
            .iter()
            .find(|(id, _)| *id == item.id)
            .map(|(_, outcome)| *outcome);
        match outcome {
            Some(ReviewOutcome::Mastered { .. }) => {
                tracing::info!(id = %item.id, "Item mastered");
                result.add_message(CmdMessage::success(format!("Mastered: {}", item.title)));
            }
            Some(ReviewOutcome::Rescheduled { level, .. }) => {
                let schedule = item.schedule_or(default_schedule);
                tracing::debug!(id = %item.id, level, "Review completed");
                result.add_message(CmdMessage::success(format!(
                    "Reviewed: {} (level {}/{}, next in {} days)",
                    item.title,
                    level,
                    schedule.len(),
                    schedule[level]
                )));
            }
            _ => {}
        }
    }
    for item in &applied.skipped {
        let state = if item.is_mastered() { "mastered" } else { "archived" };
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} item: {}",
            state, item.title
        )));
    }
    for id in &applied.missing {
        result.add_message(missing_message(id));
    }

    Ok(result.with_affected_items(applied.changed))
}
