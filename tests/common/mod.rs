// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Common test utilities for the hoopcheck test suite

#![allow(dead_code)]

use hoopcheck::core::{BinOp, Formula, Term};
use hoopcheck::provers::{ProverConfig, ProverKind};
use hoopcheck::Axiom;
use std::path::PathBuf;

pub mod assertions;
pub mod generators;
pub mod mock_prover;

/// `forall x. f(x, x) == e`
pub fn reflexivity() -> Axiom {
    let f = BinOp::new("f");
    let x = Term::var("x");
    let e = Term::constant("e");
    Axiom::new(
        "refl",
        "test",
        Formula::forall(&[&x], f.apply(&x, &x).equals(&e)),
    )
}

/// `forall x. f(e, x) == x`
pub fn unit_reduction() -> Axiom {
    let f = BinOp::new("f");
    let x = Term::var("x");
    let e = Term::constant("e");
    Axiom::new(
        "unit_red",
        "test",
        Formula::forall(&[&x], f.apply(&e, &x).equals(&x)),
    )
}

/// `forall x. x == x`, valid in every structure
pub fn trivial() -> Axiom {
    let x = Term::var("x");
    Axiom::new("trivial", "test", Formula::forall(&[&x], x.equals(&x)))
}

/// `forall x y. x == y`, fails in any structure with two elements
pub fn collapse() -> Axiom {
    let x = Term::var("x");
    let y = Term::var("y");
    Axiom::new("collapse", "test", Formula::forall(&[&x, &y], x.equals(&y)))
}

/// Create a test configuration for a prover
pub fn test_prover_config(kind: ProverKind) -> ProverConfig {
    ProverConfig {
        executable: kind.default_executable(),
        args: vec![],
        timeout_ms: 2000,
        kill_grace_ms: 5000,
    }
}

/// Check if a prover executable is available
pub fn is_prover_available(kind: ProverKind) -> bool {
    let config = test_prover_config(kind);
    which::which(&config.executable).is_ok()
}

/// Path to the checked-in experiment files
pub fn experiments_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("experiments")
}

/// Skip test if prover is not available
#[macro_export]
macro_rules! require_prover {
    ($kind:expr) => {
        if !$crate::common::is_prover_available($kind) {
            eprintln!("Skipping test: {} not available", $kind);
            return;
        }
    };
}
