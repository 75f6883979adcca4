// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Entailment checking
//!
//! Assumptions entail a conclusion when `assumptions ∧ ¬conclusion` is
//! unsatisfiable. Every conclusion gets its own solver session, so a slow or
//! inconclusive check leaves the following ones untouched.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::catalog::Axiom;
use crate::core::Formula;
use crate::provers::{ProverBackend, SatResult};
use crate::report::Reporter;

/// Classification of a single conclusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "holds")]
    Holds,
    #[serde(rename = "doesn't hold")]
    DoesntHold,
    #[serde(rename = "unknown")]
    Unknown,
}

impl From<SatResult> for Verdict {
    fn from(result: SatResult) -> Self {
        match result {
            SatResult::Unsat => Verdict::Holds,
            SatResult::Sat => Verdict::DoesntHold,
            SatResult::Unknown => Verdict::Unknown,
        }
    }
}

impl Verdict {
    /// Status word and explanation printed in the per-check trace
    pub fn headline(&self) -> (&'static str, &'static str) {
        match self {
            Verdict::Holds => ("HOLDS", "(Assumptions entail Conclusion)"),
            Verdict::DoesntHold => ("DOESN'T HOLD", "(Found countermodel/scenario)"),
            Verdict::Unknown => ("UNKNOWN", "(Timeout or resource limit?)"),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Holds => write!(f, "holds"),
            Verdict::DoesntHold => write!(f, "doesn't hold"),
            Verdict::Unknown => write!(f, "unknown"),
        }
    }
}

/// Result of checking one conclusion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Catalog name of the conclusion
    pub name: String,
    /// Display text used in the report
    pub display: String,
    pub verdict: Verdict,
    /// Wall-clock time spent deciding, in seconds
    pub elapsed_secs: f64,
}

/// Runs entailment checks against a prover backend
pub struct EntailmentChecker<'a> {
    prover: &'a dyn ProverBackend,
}

impl<'a> EntailmentChecker<'a> {
    pub fn new(prover: &'a dyn ProverBackend) -> Self {
        EntailmentChecker { prover }
    }

    /// Display text for a formula, falling back to its raw structure when the
    /// prover cannot render it
    pub fn display(&self, formula: &Formula) -> String {
        match self.prover.render(formula) {
            Ok(text) => text,
            Err(e) => {
                warn!("{}, using raw form", e);
                formula.sexpr()
            }
        }
    }

    /// Checks every conclusion against the same assumptions.
    ///
    /// Returns one outcome per conclusion, in input order. Trace output goes
    /// to `reporter`.
    pub async fn check<W: Write>(
        &self,
        assumptions: &[Axiom],
        conclusions: &[Axiom],
        timeout_ms: u64,
        reporter: &mut Reporter<W>,
    ) -> Result<Vec<CheckOutcome>> {
        info!(
            "Checking {} conclusion(s) against {} assumption(s) with {}",
            conclusions.len(),
            assumptions.len(),
            self.prover.kind()
        );
        reporter.header(self.prover.kind(), assumptions.len(), timeout_ms)?;

        let mut outcomes = Vec::with_capacity(conclusions.len());
        for (i, conclusion) in conclusions.iter().enumerate() {
            let display = self.display(&conclusion.formula);
            reporter.check_started(i + 1, conclusions.len(), &display)?;

            let mut session = self.prover.session();
            session.set_timeout(timeout_ms);
            for assumption in assumptions {
                session.assert(&assumption.formula);
            }
            session.assert(&conclusion.formula.negate());

            let start = Instant::now();
            let result = session.check_sat().await?;
            let elapsed = start.elapsed();
            drop(session);

            let verdict = Verdict::from(result);
            debug!("{}: {} -> {} in {:?}", conclusion.name, result, verdict, elapsed);
            reporter.check_finished(verdict, elapsed)?;

            outcomes.push(CheckOutcome {
                name: conclusion.name.clone(),
                display,
                verdict,
                elapsed_secs: elapsed.as_secs_f64(),
            });
        }

        reporter.footer()?;
        Ok(outcomes)
    }
}
