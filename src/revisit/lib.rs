//! # Revisit Architecture
//!
//! Revisit is a **spaced-repetition tracker library** with a command-line
//! client. Topics are scheduled for review on a fixed ladder of day intervals;
//! each completed review climbs one rung until the ladder runs out and the
//! topic is mastered.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves selectors (indexes → UUIDs), reads the clock    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over the item collection                  │
//! │  - Time comes in as an argument                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Item lifecycle
//!
//! ```text
//!            complete (level < len)
//!              ┌──────┐
//!              ▼      │
//!  add ──▶  Active ───┴── complete (level reaches len) ──▶ Mastered ──▶ clear
//!           │    ▲
//!   archive │    │ restore
//!           ▼    │
//!          Archived ── 7 days ──▶ swept
//! ```
//!
//! Any item can be deleted outright.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`schedule`]: The review ladder and interval parsing
//! - [`agenda`]: Overdue / due today / upcoming grouping
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`RevisionItem`, `ItemState`)
//! - [`index`]: Display indexing system (1, a1, m1 notation)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod agenda;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod schedule;
pub mod store;
