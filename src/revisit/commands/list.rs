use crate::agenda::build_agenda;
use crate::commands::helpers::indexed_items;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use chrono::{DateTime, TimeZone};

/// Indexes the whole collection and groups it into the agenda.
///
/// `now` decides which active items are overdue or due today; its time zone is
/// the one calendar days are counted in.
pub fn run<S: DataStore, Tz: TimeZone>(store: &S, now: &DateTime<Tz>) -> Result<CmdResult> {
    let indexed = indexed_items(store)?;
    let agenda = build_agenda(indexed.clone(), now);
    Ok(CmdResult::default()
        .with_listed_items(indexed)
        .with_agenda(agenda))
}
