//! Keyword-based sentiment classifier.
//!
//! # Invariants
//! - Each keyword contributes at most one hit regardless of repetitions.
//! - Matching is case-folded substring containment; `fail` matches `failure`.
//! - `score` always lies in `[NEUTRAL_SCORE, MAX_SCORE]`.

use crate::model::emotion::Emotion;
use serde::Serialize;

/// Score assigned to every neutral classification.
pub const NEUTRAL_SCORE: f64 = 0.5;
/// Upper bound of any classification score.
pub const MAX_SCORE: f64 = 0.95;

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "happy",
    "joy",
    "great",
    "good",
    "love",
    "amazing",
    "wonderful",
    "excited",
    "proud",
    "grateful",
    "fantastic",
    "awesome",
    "brilliant",
    "excellent",
    "perfect",
    "beautiful",
    "success",
    "achievement",
    "win",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "sad",
    "bad",
    "angry",
    "terrible",
    "hate",
    "upset",
    "awful",
    "depressed",
    "anxious",
    "worried",
    "frustrated",
    "disappointed",
    "stressed",
    "overwhelmed",
    "lonely",
    "hurt",
    "pain",
    "fail",
];

/// Classifier output for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub label: Emotion,
    pub score: f64,
    pub glyph: &'static str,
    /// Number of distinct positive keywords found.
    pub positive_hits: u32,
    /// Number of distinct negative keywords found.
    pub negative_hits: u32,
}

/// Classifies optional text; `None` and `""` yield the neutral default.
pub fn classify(text: Option<&str>) -> Classification {
    match text {
        Some(text) => classify_text(text),
        None => neutral(0, 0),
    }
}

/// Classifies `text` by counting matched positive and negative keywords.
pub fn classify_text(text: &str) -> Classification {
    if text.is_empty() {
        return neutral(0, 0);
    }

    let folded = text.to_lowercase();
    let positive_hits = count_hits(&folded, POSITIVE_KEYWORDS);
    let negative_hits = count_hits(&folded, NEGATIVE_KEYWORDS);

    if positive_hits > negative_hits {
        labeled(
            Emotion::Positive,
            positive_hits - negative_hits,
            positive_hits,
            negative_hits,
        )
    } else if negative_hits > positive_hits {
        labeled(
            Emotion::Negative,
            negative_hits - positive_hits,
            positive_hits,
            negative_hits,
        )
    } else {
        neutral(positive_hits, negative_hits)
    }
}

fn count_hits(folded: &str, keywords: &[&str]) -> u32 {
    keywords
        .iter()
        .filter(|keyword| folded.contains(*keyword))
        .map(|_| 1)
        .sum()
}

/// `0.6 + 0.1 * margin`, capped at [`MAX_SCORE`].
///
/// Computed in tenths so that e.g. a margin of 3 lands on the double nearest
/// to `0.9` rather than `0.6 + 0.30000000000000004`.
fn margin_score(margin: u32) -> f64 {
    let tenths = 6_u32.saturating_add(margin);
    (f64::from(tenths) / 10.0).min(MAX_SCORE)
}

fn labeled(label: Emotion, margin: u32, positive_hits: u32, negative_hits: u32) -> Classification {
    Classification {
        label,
        score: margin_score(margin),
        glyph: label.glyph(),
        positive_hits,
        negative_hits,
    }
}

fn neutral(positive_hits: u32, negative_hits: u32) -> Classification {
    Classification {
        label: Emotion::Neutral,
        score: NEUTRAL_SCORE,
        glyph: Emotion::Neutral.glyph(),
        positive_hits,
        negative_hits,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        classify, classify_text, margin_score, MAX_SCORE, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS,
    };
    use crate::model::emotion::Emotion;

    #[test]
    fn keyword_sets_have_expected_sizes() {
        assert_eq!(POSITIVE_KEYWORDS.len(), 19);
        assert_eq!(NEGATIVE_KEYWORDS.len(), 18);
    }

    #[test]
    fn absent_and_empty_text_are_neutral() {
        for result in [classify(None), classify(Some("")), classify_text("")] {
            assert_eq!(result.label, Emotion::Neutral);
            assert_eq!(result.score, 0.5);
            assert_eq!(result.glyph, Emotion::Neutral.glyph());
        }
    }

    #[test]
    fn margin_score_caps_at_max() {
        assert_eq!(margin_score(1), 0.7);
        assert_eq!(margin_score(3), 0.9);
        assert_eq!(margin_score(4), MAX_SCORE);
        assert_eq!(margin_score(u32::MAX), MAX_SCORE);
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let result = classify_text("sad sad sad sad");
        assert_eq!(result.negative_hits, 1);
        assert_eq!(result.label, Emotion::Negative);
        assert_eq!(result.score, 0.7);
    }
}
