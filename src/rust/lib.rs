// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! hoopcheck: entailment experiments over residuated-structure axioms
//!
//! A catalog of universally quantified equational axioms over binary
//! operations (hoops, Heyting semilattices, relative closure variants) is
//! grouped into named theories. Selected assumptions are checked against
//! candidate conclusions by an external SMT solver, each conclusion
//! classified as holding, failing, or unknown within a time budget.

pub mod catalog;
pub mod checker;
pub mod core;
pub mod error;
pub mod experiment;
pub mod provers;
pub mod report;
pub mod theory;

pub use catalog::{Axiom, Catalog, Vocabulary};
pub use checker::{CheckOutcome, EntailmentChecker, Verdict};
pub use core::{BinOp, Formula, Signature, Term};
pub use error::{Error, Result};
pub use experiment::{Experiment, ExperimentConfig};
pub use provers::{ProverBackend, ProverConfig, ProverFactory, ProverKind, ProverSession, SatResult};
pub use report::{CheckReport, Reporter};
pub use theory::{Theory, TheoryRegistry};
