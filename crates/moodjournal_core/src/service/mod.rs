//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate classify -> construct -> persist on the write path.
//! - Serve snapshot-derived stats on the read path.
//! - Keep presentation layers decoupled from storage details.

pub mod demo_data;
pub mod journal_service;
