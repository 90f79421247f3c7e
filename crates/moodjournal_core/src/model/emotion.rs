//! Emotion label set.
//!
//! # Invariants
//! - The label set is closed: `positive|negative|neutral`.
//! - Glyph and mood value are pure functions of the label.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Emotional tone assigned to an entry by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Positive,
    Negative,
    Neutral,
}

impl Emotion {
    /// Stable lowercase label used by storage and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Strict inverse of [`Emotion::as_str`].
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }

    /// Display glyph shown next to an entry.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Negative => "😢",
            Self::Neutral => "😐",
        }
    }

    /// Numeric mood used as the y-axis of the trend series.
    pub fn mood_value(self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Neutral => 0,
            Self::Negative => -1,
        }
    }
}

impl Display for Emotion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
