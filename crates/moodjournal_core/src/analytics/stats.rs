//! Emotion statistics.
//!
//! # Invariants
//! - Buckets appear in first-seen label order of the input.
//! - Bucket counts sum to the number of input entries.

use crate::analytics::trend::{build_trend, TrendPoint, TREND_WINDOW};
use crate::model::emotion::Emotion;
use crate::model::entry::Entry;
use serde::Serialize;

/// Per-label entry count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionStat {
    pub emotion: Emotion,
    pub count: usize,
    /// Glyph of the first entry seen with this label.
    pub emoji_feedback: String,
}

/// Stats payload consumed by presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodStats {
    pub total: usize,
    pub emotion_stats: Vec<EmotionStat>,
    /// Newest-first prefix of the snapshot, at most `TREND_WINDOW` long.
    pub recent_entries: Vec<Entry>,
    pub trend: Vec<TrendPoint>,
}

impl MoodStats {
    /// Derives every stats view from the same newest-first snapshot.
    pub fn from_entries(entries: &[Entry]) -> Self {
        Self {
            total: entries.len(),
            emotion_stats: aggregate(entries),
            recent_entries: recent_entries(entries, TREND_WINDOW),
            trend: build_trend(entries),
        }
    }
}

/// Counts entries per emotion, preserving first-seen label order.
pub fn aggregate(entries: &[Entry]) -> Vec<EmotionStat> {
    let mut stats: Vec<EmotionStat> = Vec::new();
    for entry in entries {
        match stats.iter_mut().find(|stat| stat.emotion == entry.emotion) {
            Some(stat) => stat.count += 1,
            None => stats.push(EmotionStat {
                emotion: entry.emotion,
                count: 1,
                emoji_feedback: entry.emoji_feedback.clone(),
            }),
        }
    }
    stats
}

/// Returns the first `limit` entries of a newest-first snapshot.
pub fn recent_entries(entries: &[Entry], limit: usize) -> Vec<Entry> {
    entries.iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::{aggregate, recent_entries};
    use crate::model::entry::Entry;

    #[test]
    fn recent_entries_keeps_snapshot_prefix() {
        let entries = (0..5)
            .map(|i| Entry::new(format!("day {i}"), i).unwrap())
            .collect::<Vec<_>>();
        let recent = recent_entries(&entries, 3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].id, entries[0].id);
        assert_eq!(recent_entries(&entries, 20).len(), 5);
    }

    #[test]
    fn aggregate_carries_first_seen_glyph() {
        let entries = vec![Entry::new("so happy", 1).unwrap()];
        let stats = aggregate(&entries);
        assert_eq!(stats[0].emoji_feedback, entries[0].emoji_feedback);
    }
}
