//! Journal entry record.
//!
//! # Responsibility
//! - Define the canonical record shared by every store backend.
//! - Bind classifier output to the entry at construction time.
//!
//! # Invariants
//! - `text` is never blank.
//! - `confidence` lies in `[MIN_CONFIDENCE, MAX_CONFIDENCE]`.
//! - `emoji_feedback` is always `emotion.glyph()`.
//! - No field changes after construction.

use crate::model::emotion::Emotion;
use crate::sentiment::classifier::{classify_text, Classification, MAX_SCORE, NEUTRAL_SCORE};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable, time-ordered identifier of a journal entry (UUIDv7).
pub type EntryId = Uuid;

/// Lowest confidence an entry can carry.
pub const MIN_CONFIDENCE: f64 = NEUTRAL_SCORE;
/// Highest confidence an entry can carry.
pub const MAX_CONFIDENCE: f64 = MAX_SCORE;

/// One journal submission with its derived emotion metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// Original user input.
    pub text: String,
    pub emotion: Emotion,
    /// Heuristic strength of `emotion`, not a calibrated probability.
    pub confidence: f64,
    pub emoji_feedback: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Validation errors for entry construction and persisted state.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryValidationError {
    /// Entry text is empty or whitespace only.
    EmptyText,
    ConfidenceOutOfRange(f64),
    /// Stored glyph does not belong to the stored emotion.
    GlyphMismatch { emotion: Emotion, glyph: String },
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "entry text is required"),
            Self::ConfidenceOutOfRange(value) => write!(
                f,
                "confidence {value} is outside [{MIN_CONFIDENCE}, {MAX_CONFIDENCE}]"
            ),
            Self::GlyphMismatch { emotion, glyph } => {
                write!(f, "glyph `{glyph}` does not match emotion `{emotion}`")
            }
        }
    }
}

impl Error for EntryValidationError {}

impl Entry {
    /// Classifies `text` and builds a new entry with a generated id.
    ///
    /// `text` is stored as given; callers trim user input beforehand.
    pub fn new(text: impl Into<String>, created_at: i64) -> Result<Self, EntryValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(EntryValidationError::EmptyText);
        }
        let classification = classify_text(text.as_str());
        let entry = Self::from_classification(Uuid::now_v7(), text, &classification, created_at);
        entry.validate()?;
        Ok(entry)
    }

    /// Builds an entry from an existing classification result.
    ///
    /// Does not validate; used by [`Entry::new`] and import paths that
    /// validate separately.
    pub fn from_classification(
        id: EntryId,
        text: impl Into<String>,
        classification: &Classification,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            emotion: classification.label,
            confidence: classification.score,
            emoji_feedback: classification.glyph.to_string(),
            created_at,
        }
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.text.trim().is_empty() {
            return Err(EntryValidationError::EmptyText);
        }
        if !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&self.confidence) {
            return Err(EntryValidationError::ConfidenceOutOfRange(self.confidence));
        }
        if self.emoji_feedback != self.emotion.glyph() {
            return Err(EntryValidationError::GlyphMismatch {
                emotion: self.emotion,
                glyph: self.emoji_feedback.clone(),
            });
        }
        Ok(())
    }
}
