//! Terminal rendering of journal data.
//!
//! Plain text for people, `--json` for scripts. Empty inputs print an
//! explicit "nothing to show" line rather than an empty table.

use anyhow::Result;
use chrono::DateTime;
use moodjournal_core::{Classification, Entry, EntryId, MoodStats, TrendPoint};
use serde::Serialize;

pub fn print_created(entry: &Entry, json: bool) -> Result<()> {
    if json {
        return print_json(entry);
    }
    println!(
        "{} Recorded {} entry (confidence {:.2})",
        entry.emoji_feedback, entry.emotion, entry.confidence
    );
    println!("id: {}", entry.id);
    Ok(())
}

pub fn print_entries(entries: &[Entry], json: bool) -> Result<()> {
    if json {
        return print_json(&entries);
    }
    if entries.is_empty() {
        println!("No entries yet.");
        return Ok(());
    }
    for entry in entries {
        println!(
            "{} {} {:<8} {:.2}  {}",
            format_timestamp(entry.created_at),
            entry.emoji_feedback,
            entry.emotion.as_str(),
            entry.confidence,
            entry.id
        );
        println!("    {}", entry.text);
    }
    Ok(())
}

pub fn print_deleted(id: EntryId, removed: bool) {
    if removed {
        println!("Deleted entry {id}.");
    } else {
        println!("No entry with id {id}; nothing deleted.");
    }
}

pub fn print_stats(stats: &MoodStats, json: bool) -> Result<()> {
    if json {
        return print_json(stats);
    }
    if stats.emotion_stats.is_empty() {
        println!("No statistics available yet.");
        return Ok(());
    }
    println!("Entries: {}", stats.total);
    for stat in &stats.emotion_stats {
        println!(
            "  {} {:<8} {}",
            stat.emoji_feedback,
            stat.emotion.as_str(),
            stat.count
        );
    }
    println!("Recent:");
    for entry in &stats.recent_entries {
        println!(
            "  {} {} {}",
            format_timestamp(entry.created_at),
            entry.emoji_feedback,
            entry.emotion
        );
    }
    Ok(())
}

pub fn print_trend(trend: &[TrendPoint], json: bool) -> Result<()> {
    if json {
        return print_json(&trend);
    }
    if trend.is_empty() {
        println!("No trend data.");
        return Ok(());
    }
    for point in trend {
        println!(
            "{:>3} {:<9} {} {:>2} {}",
            point.index,
            point.label,
            format_timestamp(point.created_at),
            point.mood_value,
            mood_bar(point.mood_value)
        );
    }
    Ok(())
}

pub fn print_classification(classification: &Classification, json: bool) -> Result<()> {
    if json {
        return print_json(classification);
    }
    println!(
        "{} {} (score {:.2}, positive hits {}, negative hits {})",
        classification.glyph,
        classification.label,
        classification.score,
        classification.positive_hits,
        classification.negative_hits
    );
    Ok(())
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_timestamp(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms).map_or_else(
        || epoch_ms.to_string(),
        |time| time.format("%Y-%m-%d %H:%M").to_string(),
    )
}

fn mood_bar(mood_value: i8) -> &'static str {
    match mood_value {
        1 => "    |##",
        -1 => "  ##|",
        _ => "    |",
    }
}
