//! Lexical sentiment classification.
//!
//! # Responsibility
//! - Map free text to an emotion label, a confidence score and a glyph.
//!
//! # Invariants
//! - Classification is pure: no I/O, no logging, no shared state.

pub mod classifier;
