use moodjournal_core::{classify, classify_text, Emotion};

#[test]
fn empty_and_absent_text_default_to_neutral() {
    let empty = classify(Some(""));
    let absent = classify(None);
    assert_eq!(empty, absent);
    assert_eq!(empty.label, Emotion::Neutral);
    assert_eq!(empty.score, 0.5);
}

#[test]
fn balanced_keywords_are_neutral() {
    let result = classify_text("I am happy and sad");
    assert_eq!(result.positive_hits, 1);
    assert_eq!(result.negative_hits, 1);
    assert_eq!(result.label, Emotion::Neutral);
    assert_eq!(result.score, 0.5);
    assert_eq!(result.glyph, "😐");
}

#[test]
fn three_positive_keywords_score_point_nine() {
    let result = classify_text("happy great wonderful");
    assert_eq!(result.label, Emotion::Positive);
    assert_eq!(result.positive_hits, 3);
    assert_eq!(result.score, 0.9);
    assert_eq!(result.glyph, "😊");
}

#[test]
fn negative_margin_uses_same_formula() {
    let result = classify_text("Terrible, awful day. So ANGRY.");
    assert_eq!(result.label, Emotion::Negative);
    assert_eq!(result.negative_hits, 3);
    assert_eq!(result.score, 0.9);
    assert_eq!(result.glyph, "😢");
}

#[test]
fn large_margin_caps_at_point_nine_five() {
    let result = classify_text("happy joy great good love amazing");
    assert_eq!(result.label, Emotion::Positive);
    assert_eq!(result.score, 0.95);
}

#[test]
fn matching_is_case_insensitive_substring() {
    // `fail` inside `failure`, `win` inside `window`.
    let negative = classify_text("A total FAILURE");
    assert_eq!(negative.label, Emotion::Negative);
    assert_eq!(negative.score, 0.7);

    let positive = classify_text("Opened the window");
    assert_eq!(positive.label, Emotion::Positive);
}

#[test]
fn text_without_keywords_is_neutral() {
    let result = classify_text("Went to the store and bought bread.");
    assert_eq!(result.label, Emotion::Neutral);
    assert_eq!(result.positive_hits + result.negative_hits, 0);
}

#[test]
fn score_always_within_bounds() {
    let samples = [
        "",
        "neutral words only",
        "happy",
        "sad",
        "happy sad bad",
        "fantastic awesome brilliant excellent perfect beautiful success achievement win",
        "depressed anxious worried frustrated disappointed stressed overwhelmed lonely hurt pain",
        "I love it but I hate it and it hurts",
    ];
    for text in samples {
        let result = classify_text(text);
        assert!(
            (0.5..=0.95).contains(&result.score),
            "score {} out of range for {text:?}",
            result.score
        );
        assert_eq!(result.glyph, result.label.glyph());
    }
}

#[test]
fn classification_is_deterministic() {
    let text = "Proud of the achievement, but stressed";
    assert_eq!(classify_text(text), classify_text(text));
}
