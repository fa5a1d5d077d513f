//! # Display Indexes
//!
//! Items are identified by UUIDs in storage, which are unpleasant to type. The
//! CLI refers to them by short display indexes instead, one numbering per group:
//!
//! - `1, 2, 3`: active items, soonest review first
//! - `a1, a2`: archived items, most recently archived first
//! - `m1, m2`: mastered items, most recently mastered first
//!
//! Indexes are recomputed from the collection on every call, so they are only
//! stable between two commands if nothing changed in between. Ranges (`2-4`,
//! `a1-a3`) expand inclusively. A full UUID is always accepted as well.

use crate::model::{ItemState, RevisionItem};
use serde::Serialize;
use std::str::FromStr;
use uuid::Uuid;

/// Largest number of indexes a single range may expand to.
pub const MAX_RANGE_SPAN: usize = 1000;

/// A user-facing index for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    Active(usize),
    Archived(usize),
    Mastered(usize),
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayIndex::Active(i) => write!(f, "{}", i),
            DisplayIndex::Archived(i) => write!(f, "a{}", i),
            DisplayIndex::Mastered(i) => write!(f, "m{}", i),
        }
    }
}

impl Serialize for DisplayIndex {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix('a') {
            if let Ok(n) = rest.parse() {
                return Ok(DisplayIndex::Archived(n));
            }
        }
        if let Some(rest) = s.strip_prefix('m') {
            if let Ok(n) = rest.parse() {
                return Ok(DisplayIndex::Mastered(n));
            }
        }
        if let Ok(n) = s.parse() {
            return Ok(DisplayIndex::Active(n));
        }
        Err(format!("Invalid index format: {}", s))
    }
}

/// A user input to select an item, either by display index or by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    Index(DisplayIndex),
    Id(Uuid),
}

impl std::fmt::Display for ItemSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemSelector::Index(idx) => write!(f, "{}", idx),
            ItemSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DisplayItem {
    pub index: DisplayIndex,
    pub item: RevisionItem,
}

/// Assigns display indexes to the collection.
///
/// The returned list is grouped: active entries first (by next review date,
/// ties in insertion order), then archived, then mastered.
pub fn index_items(items: &[RevisionItem]) -> Vec<DisplayItem> {
    let mut active: Vec<&RevisionItem> = Vec::new();
    let mut archived: Vec<&RevisionItem> = Vec::new();
    let mut mastered: Vec<&RevisionItem> = Vec::new();

    for item in items {
        match item.state {
            ItemState::Active => active.push(item),
            ItemState::Archived { .. } => archived.push(item),
            ItemState::Mastered { .. } => mastered.push(item),
        }
    }

    // sort_by_key is stable, so equal dates keep insertion order
    active.sort_by_key(|item| item.next_revision_date);
    archived.sort_by_key(|item| std::cmp::Reverse(item.archived_at()));
    mastered.sort_by_key(|item| std::cmp::Reverse(item.completed_at()));

    numbered(active, DisplayIndex::Active)
        .into_iter()
        .chain(numbered(archived, DisplayIndex::Archived))
        .chain(numbered(mastered, DisplayIndex::Mastered))
        .collect()
}

fn numbered(group: Vec<&RevisionItem>, make: fn(usize) -> DisplayIndex) -> Vec<DisplayItem> {
    group
        .into_iter()
        .enumerate()
        .map(|(i, item)| DisplayItem {
            index: make(i + 1),
            item: item.clone(),
        })
        .collect()
}

/// Parses one selector argument into one or more selectors.
///
/// Supports formats:
/// - Single index: "3", "a1", "m2"
/// - Range: "3-5" (expands to 3, 4, 5), "a1-a3"
/// - Full UUID
pub fn parse_selector(s: &str) -> Result<Vec<ItemSelector>, String> {
    if let Ok(id) = Uuid::parse_str(s) {
        return Ok(vec![ItemSelector::Id(id)]);
    }
    parse_index_or_range(s).map(|indexes| indexes.into_iter().map(ItemSelector::Index).collect())
}

/// Parses every argument with [`parse_selector`], failing on the first bad one.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ItemSelector>, String> {
    let mut selectors = Vec::new();
    for input in inputs {
        selectors.extend(parse_selector(input.as_ref())?);
    }
    Ok(selectors)
}

/// Parses a single index or an inclusive range of indexes.
///
/// Range rules:
/// - Both endpoints must be the same kind (active, archived or mastered)
/// - Start must be <= end
/// - At most [`MAX_RANGE_SPAN`] indexes
/// - Whether the indexes exist is checked later, during resolution
pub fn parse_index_or_range(s: &str) -> Result<Vec<DisplayIndex>, String> {
    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 {
            let start = DisplayIndex::from_str(&s[..dash_pos])?;
            let end = DisplayIndex::from_str(&s[dash_pos + 1..])?;
            return expand_range(start, end);
        }
    }

    DisplayIndex::from_str(s).map(|idx| vec![idx])
}

fn expand_range(start: DisplayIndex, end: DisplayIndex) -> Result<Vec<DisplayIndex>, String> {
    let (s, e, make): (usize, usize, fn(usize) -> DisplayIndex) = match (start, end) {
        (DisplayIndex::Active(s), DisplayIndex::Active(e)) => (s, e, DisplayIndex::Active),
        (DisplayIndex::Archived(s), DisplayIndex::Archived(e)) => (s, e, DisplayIndex::Archived),
        (DisplayIndex::Mastered(s), DisplayIndex::Mastered(e)) => (s, e, DisplayIndex::Mastered),
        _ => {
            return Err(format!(
                "Invalid range: cannot mix index types ({} and {})",
                start, end
            ))
        }
    };

    if s > e {
        return Err(format!(
            "Invalid range: start ({}) must be <= end ({})",
            start, end
        ));
    }
    if e - s >= MAX_RANGE_SPAN {
        return Err(format!(
            "Invalid range: {}-{} covers more than {} items",
            start, end, MAX_RANGE_SPAN
        ));
    }
    Ok((s..=e).map(make).collect())
}
