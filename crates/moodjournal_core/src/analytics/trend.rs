//! Mood trend series.
//!
//! # Invariants
//! - At most `TREND_WINDOW` points, the most recent ones.
//! - Points are in chronological order; `index` is the x coordinate.
//! - `mood_value` is one of `-1`, `0`, `1`.

use crate::model::emotion::Emotion;
use crate::model::entry::{Entry, EntryId};
use serde::Serialize;

/// Maximum number of points in a trend series.
pub const TREND_WINDOW: usize = 20;

/// One chart-ready sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Zero-based chronological position.
    pub index: usize,
    pub mood_value: i8,
    /// Display label, `Entry {index + 1}`.
    pub label: String,
    pub emotion: Emotion,
    pub entry_id: EntryId,
    /// Source entry timestamp, epoch milliseconds.
    pub created_at: i64,
}

/// Builds the chronological trend of the most recent `TREND_WINDOW` entries.
///
/// Input order does not matter. Equal timestamps are ordered by id, which
/// follows creation order. An empty input yields an empty series, meaning
/// there is nothing to chart.
pub fn build_trend(entries: &[Entry]) -> Vec<TrendPoint> {
    let mut chronological = entries.iter().collect::<Vec<_>>();
    chronological.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    let skip = chronological.len().saturating_sub(TREND_WINDOW);
    chronological
        .into_iter()
        .skip(skip)
        .enumerate()
        .map(|(index, entry)| TrendPoint {
            index,
            mood_value: entry.emotion.mood_value(),
            label: format!("Entry {}", index + 1),
            emotion: entry.emotion,
            entry_id: entry.id,
            created_at: entry.created_at,
        })
        .collect()
}
