//! # Storage Layer
//!
//! The whole item collection lives under a single slot and is always read and
//! written as one unit. [`DataStore`] is the capability the command layer calls
//! to do that, which keeps scheduling logic independent of where the bytes go.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The collection is one JSON array in `revision_items.json`
//!   - Writes go through a temp file and a rename
//!   - Unparsable content yields an empty collection (the bad file is kept as `.bak`)
//!   - Other read failures are errors
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts writes so tests can assert that no-ops stay no-ops
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── revision_items.json   # The item collection (JSON array, insertion order)
//! └── config.json           # Settings
//! ```

use crate::error::Result;
use crate::model::RevisionItem;

pub mod fs;
pub mod memory;

/// Abstract interface for the item collection.
pub trait DataStore {
    /// Load the full collection, in insertion order.
    fn load_items(&self) -> Result<Vec<RevisionItem>>;

    /// Replace the persisted collection with `items`.
    fn save_items(&mut self, items: &[RevisionItem]) -> Result<()>;
}
