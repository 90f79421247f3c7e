//! Journal domain model.
//!
//! # Responsibility
//! - Define the canonical entry record persisted by every store backend.
//! - Define the closed emotion label set and its per-label projections.
//!
//! # Invariants
//! - Every entry is identified by a stable, time-ordered `EntryId`.
//! - Emotion metadata is fixed at creation and never recomputed.
//! - Deletion is a hard delete by id; entries are never edited.

pub mod emotion;
pub mod entry;
