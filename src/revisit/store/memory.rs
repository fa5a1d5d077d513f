use super::DataStore;
use crate::error::Result;
use crate::model::RevisionItem;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    items: Vec<RevisionItem>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<RevisionItem>) -> Self {
        Self { items, saves: 0 }
    }

    /// Number of times the collection has been written.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn items(&self) -> &[RevisionItem] {
        &self.items
    }
}

impl DataStore for InMemoryStore {
    fn load_items(&self) -> Result<Vec<RevisionItem>> {
        Ok(self.items.clone())
    }

    fn save_items(&mut self, items: &[RevisionItem]) -> Result<()> {
        self.items = items.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ItemState, DEFAULT_INTERVALS};
    use chrono::{DateTime, Utc};

    /// Builds a store pre-populated with items in known states.
    ///
    /// Items are appended in call order; fixture writes do not count as saves.
    pub struct StoreFixture {
        pub store: InMemoryStore,
        now: DateTime<Utc>,
    }

    impl StoreFixture {
        pub fn new(now: DateTime<Utc>) -> Self {
            Self {
                store: InMemoryStore::new(),
                now,
            }
        }

        pub fn with_active(mut self, title: &str) -> Self {
            let item = RevisionItem::new(title.to_string(), DEFAULT_INTERVALS.to_vec(), self.now);
            self.store.items.push(item);
            self
        }

        pub fn with_archived(mut self, title: &str, archived_at: DateTime<Utc>) -> Self {
            let mut item =
                RevisionItem::new(title.to_string(), DEFAULT_INTERVALS.to_vec(), self.now);
            item.state = ItemState::Archived { at: archived_at };
            self.store.items.push(item);
            self
        }

        pub fn with_mastered(mut self, title: &str) -> Self {
            let mut item =
                RevisionItem::new(title.to_string(), DEFAULT_INTERVALS.to_vec(), self.now);
            item.level = DEFAULT_INTERVALS.len();
            item.next_revision_date = self.now;
            item.state = ItemState::Mastered { at: self.now };
            self.store.items.push(item);
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
