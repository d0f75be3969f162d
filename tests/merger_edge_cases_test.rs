//! Table-driven edge case tests for span merging

use scrub::deid::{merge_spans, PhiSpan};
use scrub::domain::{PhiLabel, ScrubError};
use test_case::test_case;

fn name(start: usize, end: usize) -> PhiSpan {
    PhiSpan::new(start, end, PhiLabel::Name)
}

fn date(start: usize, end: usize) -> PhiSpan {
    PhiSpan::new(start, end, PhiLabel::Date)
}

// Rule precedence: the rule span survives every overlap geometry
#[test_case(5, 10, 3, 15 ; "model contains rule")]
#[test_case(5, 10, 7, 9 ; "rule contains model")]
#[test_case(5, 10, 8, 20 ; "model overhangs right")]
#[test_case(5, 10, 2, 7 ; "model overhangs left")]
#[test_case(5, 10, 5, 10 ; "identical intervals")]
fn rule_span_survives(rule_start: usize, rule_end: usize, model_start: usize, model_end: usize) {
    let rule = vec![date(rule_start, rule_end)];
    let model = vec![name(model_start, model_end)];

    let merged = merge_spans(&rule, &model, 100).unwrap();
    assert_eq!(merged, vec![date(rule_start, rule_end)]);
}

// Model-vs-model: the span with the larger end wins; ties keep the first
#[test_case(0, 6, 4, 12, 4, 12 ; "later span reaches further")]
#[test_case(0, 12, 4, 10, 0, 12 ; "earlier span reaches further")]
#[test_case(0, 8, 2, 8, 0, 8 ; "equal ends keep first")]
fn model_extent_preference(
    a_start: usize,
    a_end: usize,
    b_start: usize,
    b_end: usize,
    want_start: usize,
    want_end: usize,
) {
    let model = vec![name(a_start, a_end), name(b_start, b_end)];
    let merged = merge_spans(&[], &model, 100).unwrap();
    assert_eq!(merged, vec![name(want_start, want_end)]);
}

// Malformed candidates abort the merge
#[test_case(4, 4 ; "empty interval")]
#[test_case(9, 2 ; "inverted interval")]
#[test_case(95, 101 ; "end past text")]
fn malformed_span_rejected(start: usize, end: usize) {
    let spans = vec![name(start, end)];
    let err = merge_spans(&spans, &[], 100).unwrap_err();
    assert!(matches!(err, ScrubError::InvalidSpan { .. }));
}

#[test]
fn chain_of_pairwise_overlaps() {
    // Model chain where each span overlaps only its neighbor: the sweep
    // resolves pairwise, so the final survivor is the last extender
    let model = vec![name(0, 10), name(8, 20), name(18, 30)];
    let merged = merge_spans(&[], &model, 100).unwrap();
    assert_eq!(merged, vec![name(18, 30)]);
}

#[test]
fn rule_anchors_break_model_chain() {
    // A rule span in the middle of a model chain displaces the span before
    // it and blocks the overlapping span after it
    let rule = vec![date(10, 14)];
    let model = vec![name(5, 12), name(13, 25)];
    let merged = merge_spans(&rule, &model, 100).unwrap();
    assert_eq!(merged, vec![date(10, 14)]);
}

#[test]
fn model_span_touching_rule_span_is_accepted() {
    // Half-open intervals: a model span starting exactly at the rule
    // span's end does not overlap it
    let rule = vec![date(10, 14)];
    let model = vec![name(14, 25)];
    let merged = merge_spans(&rule, &model, 100).unwrap();
    assert_eq!(merged, vec![date(10, 14), name(14, 25)]);
}

#[test]
fn sources_do_not_leak_into_result() {
    let rule = vec![date(0, 4)];
    let model = vec![name(10, 14)];
    let merged = merge_spans(&rule, &model, 100).unwrap();

    // Resolved spans are plain (start, end, label) triples
    let json = serde_json::to_string(&merged).unwrap();
    assert!(!json.contains("rule"));
    assert!(!json.contains("model"));
}

#[test]
fn interleaved_producers_sort_together() {
    let rule = vec![date(30, 40), date(0, 5)];
    let model = vec![name(10, 20), name(50, 60)];
    let merged = merge_spans(&rule, &model, 100).unwrap();
    assert_eq!(
        merged,
        vec![date(0, 5), name(10, 20), date(30, 40), name(50, 60)]
    );
}
