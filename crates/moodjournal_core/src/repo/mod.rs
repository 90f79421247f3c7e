//! Entry store contract and backend implementations.
//!
//! # Responsibility
//! - Define the storage contract consumed by the journal service.
//! - Keep backend details (SQL, file format) out of service logic.
//!
//! # Invariants
//! - Write paths enforce `Entry::validate()` before persistence.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Listing returns an owned newest-first snapshot.
//! - Deleting a missing id is a no-op, not an error.

pub mod entry_repo;
pub mod json_repo;
pub mod memory_repo;
pub mod sqlite_repo;
