// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Property-based testing generators for hoopcheck types

use hoopcheck::core::{BinOp, Formula, Term};
use proptest::prelude::*;

/// Variables the generated terms may mention
pub const VARS: [&str; 3] = ["x", "y", "z"];

/// Strategy for generating one of the catalog operators
pub fn arb_binop() -> impl Strategy<Value = BinOp> {
    prop_oneof![Just("f"), Just("m"), Just("p")].prop_map(BinOp::new)
}

/// Strategy for generating leaves: a variable or the constant `e`
pub fn leaf() -> impl Strategy<Value = Term> {
    prop_oneof![
        4 => prop::sample::select(VARS.to_vec()).prop_map(Term::var),
        1 => Just(Term::constant("e")),
    ]
}

/// Strategy for generating terms with bounded depth
pub fn term_with_depth(depth: u32) -> impl Strategy<Value = Term> {
    leaf().prop_recursive(depth, 64, 2, |inner| {
        (arb_binop(), inner.clone(), inner).prop_map(|(op, a, b)| op.apply(&a, &b))
    })
}

/// Strategy for generating arbitrary terms
pub fn arb_term() -> impl Strategy<Value = Term> {
    term_with_depth(4)
}

/// Strategy for generating closed equations, quantified over all of `VARS`
pub fn arb_equation() -> impl Strategy<Value = Formula> {
    (arb_term(), arb_term()).prop_map(|(lhs, rhs)| {
        let vars: Vec<Term> = VARS.iter().map(|v| Term::var(v)).collect();
        let refs: Vec<&Term> = vars.iter().collect();
        Formula::forall(&refs, lhs.equals(&rhs))
    })
}

/// Strategy for generating closed quasi-identities `(s1 == t1 & s2 == t2) >> s == t`
pub fn arb_quasi_identity() -> impl Strategy<Value = Formula> {
    let eq = || (arb_term(), arb_term()).prop_map(|(l, r)| l.equals(&r));
    (eq(), eq(), eq()).prop_map(|(a, b, c)| {
        let vars: Vec<Term> = VARS.iter().map(|v| Term::var(v)).collect();
        let refs: Vec<&Term> = vars.iter().collect();
        Formula::forall(&refs, (a & b) >> c)
    })
}
