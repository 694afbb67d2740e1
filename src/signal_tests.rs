use super::*;

// ========== PersonalizationSignal ==========

#[test]
fn test_score_formula() {
    let signal = PersonalizationSignal::new();
    let score = signal.score(500, 100).unwrap();
    let expected = (501.0f64).ln() + (101.0f64).ln();
    assert!((score - expected).abs() < 1e-12);
}

#[test]
fn test_zero_playtimes_score_zero() {
    let signal = PersonalizationSignal::new();
    assert_eq!(signal.score(0, 0).unwrap(), 0.0);
}

#[test]
fn test_recent_cap_applied_exactly() {
    let signal = PersonalizationSignal::new();
    let at_cap = signal.score(0, DEFAULT_RECENT_CAP_MINUTES).unwrap();
    let past_cap = signal.score(0, DEFAULT_RECENT_CAP_MINUTES + 1).unwrap();
    let far_past_cap = signal.score(0, 1_000_000).unwrap();
    assert_eq!(at_cap, past_cap);
    assert_eq!(at_cap, far_past_cap);
    assert!((at_cap - (2521.0f64).ln()).abs() < 1e-12);
}

#[test]
fn test_custom_recent_cap() {
    let signal = PersonalizationSignal::new().with_recent_cap(60);
    assert_eq!(signal.recent_cap(), 60);
    assert_eq!(signal.score(0, 60).unwrap(), signal.score(0, 600).unwrap());
}

#[test]
fn test_monotonic_in_forever_playtime() {
    let signal = PersonalizationSignal::new();
    let mut previous = f64::NEG_INFINITY;
    for forever in [0, 1, 10, 100, 1_000, 100_000] {
        let score = signal.score(forever, 50).unwrap();
        assert!(score >= previous, "score decreased at forever={forever}");
        previous = score;
    }
}

#[test]
fn test_negative_playtime_rejected() {
    let signal = PersonalizationSignal::new();
    assert!(signal.score(-1, 0).is_err());
    assert!(signal.score(0, -1).is_err());
}

// ========== SeedSelector ==========

fn rows(entries: &[(u64, i64, i64)]) -> Vec<Interaction> {
    entries
        .iter()
        .map(|&(item_id, forever, recent)| Interaction::new("u", item_id, forever, recent))
        .collect()
}

#[test]
fn test_select_ranks_by_score_descending() {
    // Capped recent playtime makes item 102 outrank item 101:
    // 101: ln(501) + ln(101)  ~ 10.83
    // 102: ln(51)  + ln(2521) ~ 11.76
    let seeds = SeedSelector::new()
        .select(&rows(&[(101, 500, 100), (102, 50, 3000)]))
        .unwrap();
    assert_eq!(seeds.len(), 2);
    assert_eq!(seeds[0].item_id, 102);
    assert_eq!(seeds[1].item_id, 101);

    let signal = PersonalizationSignal::new();
    assert_eq!(seeds[0].score, signal.score(50, 3000).unwrap());
    assert_eq!(seeds[1].score, signal.score(500, 100).unwrap());
}

#[test]
fn test_select_truncates_to_max_seeds() {
    let seeds = SeedSelector::new()
        .with_max_seeds(2)
        .select(&rows(&[(1, 10, 0), (2, 20, 0), (3, 30, 0)]))
        .unwrap();
    assert_eq!(seeds.len(), 2);
    assert_eq!(seeds[0].item_id, 3);
    assert_eq!(seeds[1].item_id, 2);
}

#[test]
fn test_select_fewer_interactions_than_max() {
    let seeds = SeedSelector::new().select(&rows(&[(1, 10, 0)])).unwrap();
    assert_eq!(seeds.len(), 1);
}

#[test]
fn test_select_tie_break_ascending_item_id() {
    let seeds = SeedSelector::new()
        .select(&rows(&[(9, 100, 0), (3, 100, 0), (5, 100, 0)]))
        .unwrap();
    let ids: Vec<u64> = seeds.iter().map(|s| s.item_id).collect();
    assert_eq!(ids, vec![3, 5, 9]);
}

#[test]
fn test_select_empty_input_is_empty_output() {
    let seeds = SeedSelector::new().select(&[]).unwrap();
    assert!(seeds.is_empty());
}

#[test]
fn test_select_propagates_invalid_input() {
    let rows = vec![Interaction::new("u", 1, -5, 0)];
    assert!(SeedSelector::new().select(&rows).is_err());
}

#[test]
fn test_select_with_custom_signal() {
    // With a tiny cap both items collapse to the same recent term; lifetime
    // playtime decides.
    let seeds = SeedSelector::new()
        .with_signal(PersonalizationSignal::new().with_recent_cap(10))
        .select(&rows(&[(1, 50, 10_000), (2, 500, 10)]))
        .unwrap();
    assert_eq!(seeds[0].item_id, 2);
}
