use super::*;

#[test]
fn score_band_splits_at_80_and_60() {
    assert_eq!(score_band(95.0), "success");
    assert_eq!(score_band(80.0), "success");
    assert_eq!(score_band(79.9), "warning");
    assert_eq!(score_band(60.0), "warning");
    assert_eq!(score_band(59.9), "error");
}

#[test]
fn score_message_matches_each_tier() {
    assert_eq!(score_message(92.0), "Outstanding! Excellent work!");
    assert_eq!(score_message(85.0), "Great job! Well done!");
    assert_eq!(score_message(72.0), "Good work! Keep it up!");
    assert_eq!(score_message(65.0), "Not bad! Room for improvement.");
    assert_eq!(score_message(30.0), "Keep practicing! You can do better.");
}

#[test]
fn score_rating_has_four_tiers() {
    assert_eq!(score_rating(80.0), "Excellent");
    assert_eq!(score_rating(60.0), "Good");
    assert_eq!(score_rating(40.0), "Fair");
    assert_eq!(score_rating(39.9), "Needs Improvement");
}
