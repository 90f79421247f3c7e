use moodjournal_core::{aggregate, build_trend, Emotion, Entry, MoodStats, TREND_WINDOW};

fn entry(text: &str, created_at: i64) -> Entry {
    Entry::new(text, created_at).unwrap()
}

#[test]
fn aggregate_of_empty_input_is_empty() {
    assert!(aggregate(&[]).is_empty());
}

#[test]
fn aggregate_preserves_first_seen_label_order() {
    let entries = vec![
        entry("a great day", 1),
        entry("a bad day", 2),
        entry("a good day", 3),
        entry("so happy", 4),
    ];
    let stats = aggregate(&entries);

    let labels = stats.iter().map(|stat| stat.emotion).collect::<Vec<_>>();
    assert_eq!(labels, vec![Emotion::Positive, Emotion::Negative]);
    assert_eq!(stats[0].count, 3);
    assert_eq!(stats[1].count, 1);
    assert_eq!(
        stats.iter().map(|stat| stat.count).sum::<usize>(),
        entries.len()
    );
}

#[test]
fn aggregate_order_follows_input_not_enum() {
    let entries = vec![entry("plain", 1), entry("sad", 2), entry("happy", 3)];
    let labels = aggregate(&entries)
        .into_iter()
        .map(|stat| stat.emotion)
        .collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec![Emotion::Neutral, Emotion::Negative, Emotion::Positive]
    );
}

#[test]
fn trend_of_empty_input_is_empty() {
    assert!(build_trend(&[]).is_empty());
}

#[test]
fn trend_sorts_chronologically_and_maps_mood_values() {
    let entries = vec![
        entry("happy", 300),
        entry("plain", 100),
        entry("awful", 200),
    ];
    let trend = build_trend(&entries);

    let values = trend.iter().map(|point| point.mood_value).collect::<Vec<_>>();
    assert_eq!(values, vec![0, -1, 1]);
    let indexes = trend.iter().map(|point| point.index).collect::<Vec<_>>();
    assert_eq!(indexes, vec![0, 1, 2]);
    let times = trend.iter().map(|point| point.created_at).collect::<Vec<_>>();
    assert_eq!(times, vec![100, 200, 300]);
}

#[test]
fn trend_keeps_most_recent_twenty_in_chronological_order() {
    let entries = (0..30_i64)
        .rev()
        .map(|i| entry(if i % 2 == 0 { "good" } else { "bad" }, i * 1_000))
        .collect::<Vec<_>>();
    let trend = build_trend(&entries);

    assert_eq!(trend.len(), TREND_WINDOW);
    assert_eq!(trend.first().unwrap().created_at, 10_000);
    assert_eq!(trend.last().unwrap().created_at, 29_000);
    assert!(trend
        .windows(2)
        .all(|pair| pair[0].created_at <= pair[1].created_at));
    assert!(trend
        .iter()
        .all(|point| [-1, 0, 1].contains(&point.mood_value)));
    assert_eq!(trend.last().unwrap().index, TREND_WINDOW - 1);
}

#[test]
fn trend_with_fewer_than_window_includes_all() {
    let entries = (0..5).map(|i| entry("fine", i)).collect::<Vec<_>>();
    assert_eq!(build_trend(&entries).len(), 5);
}

#[test]
fn derivations_are_idempotent() {
    let entries = vec![entry("love", 5), entry("hate", 3), entry("meh", 4)];
    assert_eq!(aggregate(&entries), aggregate(&entries));
    assert_eq!(build_trend(&entries), build_trend(&entries));
    assert_eq!(
        MoodStats::from_entries(&entries),
        MoodStats::from_entries(&entries)
    );
}

#[test]
fn mood_stats_combines_views_of_one_snapshot() {
    let entries = (0..25_i64)
        .rev()
        .map(|i| entry("wonderful", i))
        .collect::<Vec<_>>();
    let stats = MoodStats::from_entries(&entries);

    assert_eq!(stats.total, 25);
    assert_eq!(stats.emotion_stats.len(), 1);
    assert_eq!(stats.emotion_stats[0].count, 25);
    assert_eq!(stats.recent_entries.len(), TREND_WINDOW);
    assert_eq!(stats.recent_entries[0].created_at, 24);
    assert_eq!(stats.trend.len(), TREND_WINDOW);
    assert_eq!(stats.trend[0].created_at, 5);
}
