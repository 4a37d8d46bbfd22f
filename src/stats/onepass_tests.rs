//! Tests for stats/onepass

use super::*;
use crate::stats::Stattext;
use crate::test_utils::test_helpers::{CountingSource, SAMPLE_TEXT, UNICODE_TEXT, source};
use proptest::prelude::*;

#[test]
fn test_summary_scan() {
    let summary = TextSummary::scan(&mut source("one two\nthree 4 ...\n")).unwrap();
    assert_eq!(summary.lines, 2);
    assert_eq!(summary.words, 4);
    assert_eq!(summary.letters, 12);
    assert_eq!(summary.frequency.count('e'), 3);
    assert_eq!(summary.frequency.count('4'), 0);
}

#[test]
fn test_summary_of_empty_source() {
    let summary = TextSummary::scan(&mut source("")).unwrap();
    assert_eq!(summary, TextSummary::default());
}

#[test]
fn test_single_scan_serves_every_statistic() {
    let mut engine = OnePass::new();
    let mut src = CountingSource::new(UNICODE_TEXT);

    let report = engine.report(&mut src).unwrap();
    engine.most_common_letters(&mut src).unwrap();

    assert_eq!(src.rewinds, 1);
    assert_eq!(report.lines, 2);
    assert_eq!(report.words, 4);
    assert_eq!(report.letters, 15);
    assert_eq!(report.avg_letters_per_word.to_string(), "3.8");
}

#[test]
fn test_precision_change_uses_cached_counts() {
    let mut engine = OnePass::new();
    let mut src = CountingSource::new(UNICODE_TEXT);

    assert_eq!(engine.avg_letters_per_word(&mut src).unwrap().to_string(), "3.8");
    engine.set_precision(0).unwrap();
    assert_eq!(engine.avg_letters_per_word(&mut src).unwrap().to_string(), "3");
    assert_eq!(src.rewinds, 1);
}

#[test]
fn test_empty_source_results() {
    let mut engine = OnePass::new();
    let mut src = source("");

    assert_eq!(engine.total_lines(&mut src).unwrap(), 0);
    assert_eq!(engine.total_words(&mut src).unwrap(), 0);
    assert_eq!(engine.total_letters(&mut src).unwrap(), 0);
    assert_eq!(engine.avg_letters_per_word(&mut src).unwrap(), AverageLetters::NoWords);
    assert!(engine.most_common_letters(&mut src).unwrap().is_none());
}

#[test]
fn test_matches_stattext_on_sample() {
    let one = OnePass::new().report(&mut source(SAMPLE_TEXT)).unwrap();
    let reference = Stattext::new().report(&mut source(SAMPLE_TEXT)).unwrap();
    assert_eq!(one, reference);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_engines_agree(
        text in "[a-zA-Z0-9äÉß .,!'\\-\n\r\t]{0,80}",
        precision in 0u32..5,
    ) {
        let mut one = OnePass::new();
        one.set_precision(precision).unwrap();
        let mut reference = Stattext::new();
        reference.set_precision(precision).unwrap();

        let from_one = one.report(&mut source(&text)).unwrap();
        let from_reference = reference.report(&mut source(&text)).unwrap();
        prop_assert_eq!(from_one, from_reference);
    }
}
