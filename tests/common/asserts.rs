use cors_gate::{CorsDecision, Headers, PreflightResult};

use super::headers::{header_value, vary_values};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => result.headers,
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> PreflightResult {
    match decision {
        CorsDecision::Preflight(result) => result,
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_not_applicable(decision: CorsDecision) {
    assert!(
        matches!(decision, CorsDecision::NotApplicable),
        "expected pass-through, got {:?}",
        decision
    );
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for {name}"
    );
}

pub fn assert_vary_contains(headers: &Headers, entry: &str) {
    assert!(
        vary_values(headers)
            .iter()
            .any(|value| value.eq_ignore_ascii_case(entry)),
        "Vary should contain {entry}"
    );
}

pub fn assert_vary_is_empty(headers: &Headers) {
    assert!(vary_values(headers).is_empty(), "Vary should be absent");
}
