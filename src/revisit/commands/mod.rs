//! # Command Layer
//!
//! The business logic of revisit. Each operation lives in its own submodule as a
//! plain `run` function over a [`DataStore`](crate::store::DataStore).
//!
//! Every mutating command follows the same shape: load the whole collection,
//! transform it, and write it back only if something changed. Instants are
//! passed in as `now` rather than read from the clock, so every transition can
//! be tested at exact points in time.
//!
//! ## Bad input is not an error
//!
//! Bad input (blank titles, empty schedules) and ids that match nothing are not
//! errors. The command leaves the collection alone and says so with a warning
//! [`CmdMessage`]. `Err` is reserved for real failures such as I/O.
//!
//! ## Command Modules
//!
//! - [`add`]: Add a topic
//! - [`complete`]: Record a completed review
//! - [`archive`] / [`restore`]: Move items in and out of the archive
//! - [`delete`]: Permanently remove items
//! - [`clear`]: Remove all mastered items
//! - [`rename`]: Change an item's title
//! - [`sweep`]: Drop archived items past their retention deadline
//! - [`list`] / [`show`]: Read-only views
//! - [`config`]: Manage configuration
//! - [`helpers`]: Shared load/modify/save plumbing

use crate::agenda::Agenda;
use crate::config::RevisitConfig;
use crate::index::DisplayItem;
use crate::model::RevisionItem;
use serde::Serialize;

pub mod add;
pub mod archive;
pub mod clear;
pub mod complete;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod rename;
pub mod restore;
pub mod show;
pub mod sweep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Items created, changed or removed by the command, in their final state
    pub affected_items: Vec<RevisionItem>,
    /// Items to display, with their current indexes
    pub listed_items: Vec<DisplayItem>,
    pub agenda: Option<Agenda>,
    pub config: Option<RevisitConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<RevisionItem>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_agenda(mut self, agenda: Agenda) -> Self {
        self.agenda = Some(agenda);
        self
    }

    pub fn with_config(mut self, config: RevisitConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True if any message is a warning or an error.
    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
