// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Custom assertions for hoopcheck tests

use hoopcheck::core::Formula;
use hoopcheck::{CheckOutcome, Verdict};
use pretty_assertions::assert_eq;

/// Assert the verdicts of a run, in order
pub fn assert_verdicts(outcomes: &[CheckOutcome], expected: &[Verdict]) {
    let actual: Vec<Verdict> = outcomes.iter().map(|o| o.verdict).collect();
    assert_eq!(actual, expected.to_vec());
}

/// Assert that every variable of `formula` is bound and no symbol clashes
pub fn assert_closed(formula: &Formula) {
    let sig = formula
        .signature()
        .unwrap_or_else(|e| panic!("Signature of {} failed: {}", formula, e));

    for name in sig.constants() {
        assert!(
            !["x", "y", "z", "w"].contains(&name),
            "Variable {} is free in {}",
            name,
            formula
        );
    }
}

/// Assert that `formula` is a negation of `inner`
pub fn assert_negation_of(formula: &Formula, inner: &Formula) {
    match formula {
        Formula::Not(body) => assert_eq!(body.as_ref(), inner),
        other => panic!("Expected a negation, found {}", other),
    }
}
