//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for revisit operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: parses selectors and resolves display indexes to ids
//! - **Reads the clock**: commands take `now` as an argument, the facade supplies it
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic and no terminal I/O.
//!
//! ## Generic Over DataStore
//!
//! `RevisitApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RevisitApi<FileStore>`
//! - Testing: `RevisitApi<InMemoryStore>`
//!
//! ## Selector resolution
//!
//! Selector *syntax* errors (`"x7"`, `"5-3"`) fail the call with
//! [`RevisitError::Api`]. Well-formed selectors that match nothing are turned
//! into warning messages and the rest of the batch proceeds.

use crate::commands::{self, helpers::resolve_selectors};
use crate::config::RevisitConfig;
use crate::error::{Result, RevisitError};
use crate::index::{parse_selectors, ItemSelector};
use crate::store::DataStore;
use chrono::{Local, Utc};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// The main API facade for revisit operations.
pub struct RevisitApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
    config: RevisitConfig,
}

impl<S: DataStore> RevisitApi<S> {
    pub fn new(store: S, data_dir: PathBuf, config: RevisitConfig) -> Self {
        Self {
            store,
            data_dir,
            config,
        }
    }

    /// Adds a topic. `None` uses the configured default intervals.
    pub fn add(&mut self, title: &str, intervals: Option<Vec<u32>>) -> Result<CmdResult> {
        let intervals = intervals.unwrap_or_else(|| self.config.default_intervals.clone());
        commands::add::run(&mut self.store, title, intervals, Utc::now())
    }

    pub fn complete<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let (ids, warnings) = self.resolve_ids(selectors)?;
        let result = commands::complete::run(
            &mut self.store,
            &ids,
            &self.config.default_intervals,
            Utc::now(),
        )?;
        Ok(with_warnings(result, warnings))
    }

    pub fn archive<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let (ids, warnings) = self.resolve_ids(selectors)?;
        let result = commands::archive::run(&mut self.store, &ids, Utc::now())?;
        Ok(with_warnings(result, warnings))
    }

    pub fn restore<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let (ids, warnings) = self.resolve_ids(selectors)?;
        let result = commands::restore::run(&mut self.store, &ids)?;
        Ok(with_warnings(result, warnings))
    }

    pub fn delete_permanently<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let (ids, warnings) = self.resolve_ids(selectors)?;
        let result = commands::delete::run(&mut self.store, &ids)?;
        Ok(with_warnings(result, warnings))
    }

    pub fn clear_completed(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.store)
    }

    /// Renames the single item `selector` points at.
    pub fn update_title(&mut self, selector: &str, title: &str) -> Result<CmdResult> {
        let (ids, warnings) = self.resolve_ids(&[selector])?;
        if ids.len() > 1 {
            return Err(RevisitError::Api(format!(
                "Rename takes a single item, '{}' selects {}",
                selector,
                ids.len()
            )));
        }
        let result = match ids.first() {
            Some(id) => commands::rename::run(&mut self.store, *id, title)?,
            None => CmdResult::default(),
        };
        Ok(with_warnings(result, warnings))
    }

    /// Drops archived items past their retention deadline.
    pub fn sweep(&mut self) -> Result<CmdResult> {
        commands::sweep::run(&mut self.store, Utc::now())
    }

    /// The agenda, with calendar days counted in the local time zone.
    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, &Local::now())
    }

    pub fn show<I: AsRef<str>>(&self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse(selectors)?;
        commands::show::run(&self.store, &selectors)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn settings(&self) -> &RevisitConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn resolve_ids<I: AsRef<str>>(&self, selectors: &[I]) -> Result<(Vec<Uuid>, Vec<CmdMessage>)> {
        let selectors = parse(selectors)?;
        let (items, warnings) = resolve_selectors(&self.store, &selectors)?;
        Ok((items.into_iter().map(|dp| dp.item.id).collect(), warnings))
    }
}

fn parse<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ItemSelector>> {
    parse_selectors(inputs).map_err(RevisitError::Api)
}

// Resolution warnings come first so they read in the order the user typed.
fn with_warnings(mut result: CmdResult, warnings: Vec<CmdMessage>) -> CmdResult {
    if !warnings.is_empty() {
        let mut messages = warnings;
        messages.append(&mut result.messages);
        result.messages = messages;
    }
    result
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use chrono::{Duration, TimeZone};

    fn api_with(store: InMemoryStore) -> RevisitApi<InMemoryStore> {
        RevisitApi::new(store, PathBuf::from("/unused"), RevisitConfig::default())
    }

    fn seeded() -> RevisitApi<InMemoryStore> {
        let past = Utc::now() - Duration::days(1);
        api_with(
            StoreFixture::new(past)
                .with_active("First")
                .with_active("Second")
                .with_archived("Parked", past)
                .with_mastered("Done")
                .build(),
        )
    }

    #[test]
    fn add_uses_configured_default_intervals() {
        let config = RevisitConfig {
            default_intervals: vec![2, 4],
            ..RevisitConfig::default()
        };
        let mut api = RevisitApi::new(InMemoryStore::new(), PathBuf::from("/unused"), config);

        let res = api.add("Topic", None).unwrap();
        assert_eq!(res.affected_items[0].revision_intervals, Some(vec![2, 4]));

        let res = api.add("Other", Some(vec![5])).unwrap();
        assert_eq!(res.affected_items[0].revision_intervals, Some(vec![5]));
    }

    #[test]
    fn complete_resolves_display_indexes() {
        let mut api = seeded();
        let res = api.complete(&["1"]).unwrap();
        assert_eq!(res.affected_items.len(), 1);
        assert_eq!(res.affected_items[0].level, 1);
    }

    #[test]
    fn unknown_index_warns_and_rest_proceeds() {
        let mut api = seeded();
        let res = api.archive(&["9", "2"]).unwrap();

        assert_eq!(res.affected_items.len(), 1);
        assert!(res.messages[0].content.contains("Index 9 not found"));
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn invalid_selector_syntax_is_an_error() {
        let mut api = seeded();
        let err = api.delete_permanently(&["x1"]).unwrap_err();
        assert!(matches!(err, RevisitError::Api(_)));
    }

    #[test]
    fn restore_and_delete_use_archive_indexes() {
        let mut api = seeded();
        let res = api.restore(&["a1"]).unwrap();
        assert_eq!(res.affected_items[0].title, "Parked");

        let res = api.delete_permanently(&["m1"]).unwrap();
        assert_eq!(res.affected_items[0].title, "Done");
        assert_eq!(api.list().unwrap().listed_items.len(), 3);
    }

    #[test]
    fn update_title_takes_one_item() {
        let mut api = seeded();
        let res = api.update_title("1", "Renamed").unwrap();
        assert_eq!(res.affected_items[0].title, "Renamed");

        assert!(api.update_title("1-2", "Both").is_err());

        let res = api.update_title("7", "Nobody").unwrap();
        assert!(res.affected_items.is_empty());
        assert!(res.has_warnings());
    }

    #[test]
    fn clear_completed_and_show() {
        let mut api = seeded();
        let res = api.show(&["m1"]).unwrap();
        assert_eq!(res.listed_items[0].item.title, "Done");

        api.clear_completed().unwrap();
        let res = api.show(&["m1"]).unwrap();
        assert!(res.listed_items.is_empty());
        assert!(res.has_warnings());
    }

    #[test]
    fn sweep_drops_expired_archives() {
        let long_ago = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let mut api = api_with(
            StoreFixture::new(long_ago)
                .with_archived("Expired", long_ago)
                .with_active("Kept")
                .build(),
        );

        let res = api.sweep().unwrap();
        assert_eq!(res.affected_items.len(), 1);
        assert_eq!(api.list().unwrap().listed_items.len(), 1);
    }
}
