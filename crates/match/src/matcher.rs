use crate::config::ThresholdConfig;
use crate::model::{MatchResult, MatchStatus, RosterEntry, TestTakerEntry};
use crate::similarity::partial_similarity;

/// Classify one roster entry against the combined test-taker pool.
///
/// Names and numbers are scanned as two independent passes over the pool:
/// each pass keeps the best similarity that clears its threshold. A
/// threshold of 0 makes that pass's qualifying test vacuous, so the best
/// score over the whole pool counts, however low.
///
/// Ties resolve to `NumberMatch`: the name branch requires a strictly
/// higher score.
pub fn classify(
    entry: &RosterEntry,
    pool: &[TestTakerEntry],
    thresholds: &ThresholdConfig,
) -> MatchResult {
    let name = entry.name.to_lowercase();

    let mut best_name: u8 = 0;
    for taker in pool {
        let score = partial_similarity(&name, &taker.full_name.to_lowercase());
        if score >= thresholds.name && score > best_name {
            best_name = score;
        }
    }

    let mut best_number: u8 = 0;
    for taker in pool {
        let score = partial_similarity(&entry.number, &taker.mobile_number);
        if score >= thresholds.number && score > best_number {
            best_number = score;
        }
    }

    if best_name > best_number {
        MatchResult { status: MatchStatus::NameMatch, confidence: best_name }
    } else if best_number > 0 {
        MatchResult { status: MatchStatus::NumberMatch, confidence: best_number }
    } else {
        MatchResult { status: MatchStatus::NoMatch, confidence: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, number: &str) -> RosterEntry {
        RosterEntry {
            name: name.into(),
            number: number.into(),
            raw: vec![name.into(), number.into()],
        }
    }

    fn taker(full_name: &str, mobile_number: &str) -> TestTakerEntry {
        TestTakerEntry {
            full_name: full_name.into(),
            mobile_number: mobile_number.into(),
        }
    }

    fn thresholds(name: u8, number: u8) -> ThresholdConfig {
        ThresholdConfig { name, number }
    }

    #[test]
    fn empty_pool_is_no_match() {
        let result = classify(&entry("John Smith", "5551234"), &[], &thresholds(88, 90));
        assert_eq!(result.status, MatchStatus::NoMatch);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn exact_entry_never_no_match() {
        // Name and number both hit 100; the tie resolves to NumberMatch.
        let pool = vec![taker("Jane Doe", "5559999")];
        let result = classify(&entry("Jane Doe", "5559999"), &pool, &thresholds(88, 90));
        assert_eq!(result.status, MatchStatus::NumberMatch);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn name_wins_on_strictly_higher_score() {
        // Exact name, unrelated number: best_number stays 0.
        let pool = vec![taker("Emily Stone", "1112222")];
        let result = classify(&entry("Emily Stone", "5550000"), &pool, &thresholds(88, 90));
        assert_eq!(result.status, MatchStatus::NameMatch);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn equal_scores_resolve_to_number_match() {
        // One pool entry gives name similarity 90, another gives number
        // similarity 90. Equal bests must classify as NumberMatch.
        let pool = vec![taker("Alex Crown", "0000000000"), taker("zzzz", "5551234891")];
        let result = classify(&entry("Alex Brown", "5551234890"), &pool, &thresholds(88, 90));
        assert_eq!(result.status, MatchStatus::NumberMatch);
        assert_eq!(result.confidence, 90);
    }

    #[test]
    fn below_both_thresholds_is_no_match() {
        let pool = vec![taker("Jon Smith", "5551234")];
        let result = classify(&entry("John Smith", "5559999"), &pool, &thresholds(100, 100));
        assert_eq!(result.status, MatchStatus::NoMatch);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn thresholds_100_with_exact_number_still_matches() {
        let pool = vec![taker("Someone Else", "5551234")];
        let result = classify(&entry("John Smith", "5551234"), &pool, &thresholds(100, 100));
        assert_eq!(result.status, MatchStatus::NumberMatch);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn zero_thresholds_admit_the_best_score_in_the_pool() {
        // Qualifying test is vacuous at threshold 0: the weak 50/50 scores
        // survive, and the tie still resolves to NumberMatch.
        let pool = vec![taker("abxy", "1299")];
        let result = classify(&entry("abcd", "1234"), &pool, &thresholds(0, 0));
        assert_eq!(result.status, MatchStatus::NumberMatch);
        assert_eq!(result.confidence, 50);
    }

    #[test]
    fn reference_example_number_match_100() {
        // Thresholds {name: 88, number: 90}, roster ("John Smith", "5551234"),
        // pool [("Jon Smith", "5551234"), ("Jane Doe", "5559999")].
        // Name similarity to "jon smith" falls short of 88; the exact
        // number wins at 100.
        let pool = vec![taker("Jon Smith", "5551234"), taker("Jane Doe", "5559999")];
        let result = classify(&entry("John Smith", "5551234"), &pool, &thresholds(88, 90));
        assert_eq!(result.status, MatchStatus::NumberMatch);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn pure_function_same_inputs_same_result() {
        let pool = vec![taker("Jon Smith", "5551234"), taker("Jane Doe", "5559999")];
        let e = entry("John Smith", "5551234");
        let t = thresholds(88, 90);
        assert_eq!(classify(&e, &pool, &t), classify(&e, &pool, &t));
    }

    #[test]
    fn name_comparison_is_case_insensitive() {
        let pool = vec![taker("EMILY STONE", "1112222")];
        let result = classify(&entry("emily stone", "5550000"), &pool, &thresholds(88, 90));
        assert_eq!(result.status, MatchStatus::NameMatch);
        assert_eq!(result.confidence, 100);
    }
}
