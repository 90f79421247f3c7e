//! Read-side derivations over an entry snapshot.
//!
//! # Responsibility
//! - Count entries per emotion label.
//! - Build the chronological mood trend series.
//! - Assemble the full stats payload from one snapshot.
//!
//! # Invariants
//! - Every function here is pure and re-entrant; results are recomputed on
//!   each read and never cached.

pub mod stats;
pub mod trend;
