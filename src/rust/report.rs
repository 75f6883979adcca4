// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console report
//!
//! The text layout is fixed so that new runs can be diffed against older
//! experiment logs.

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::time::Duration;

use crate::checker::{CheckOutcome, Verdict};
use crate::provers::ProverKind;

const BANNER_WIDTH: usize = 70;
const SEPARATOR_WIDTH: usize = 25;

/// Formats a millisecond budget as seconds: `1000` gives `1.0`, `250` gives `0.25`
pub fn format_seconds(ms: u64) -> String {
    let secs = ms as f64 / 1000.0;
    if secs.fract() == 0.0 {
        format!("{:.1}", secs)
    } else {
        format!("{}", secs)
    }
}

/// Writes the per-check trace and the final summary
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl Reporter<io::Sink> {
    /// Reporter that discards everything
    pub fn silent() -> Self {
        Reporter::new(io::sink())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter { out, color: false }
    }

    /// Colours the status words of the trace
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn banner(&mut self, ch: char) -> Result<()> {
        writeln!(self.out, "{}", ch.to_string().repeat(BANNER_WIDTH))?;
        Ok(())
    }

    pub fn header(&mut self, prover: ProverKind, assumptions: usize, timeout_ms: u64) -> Result<()> {
        self.banner('-')?;
        writeln!(self.out, "Starting {} Checks...", prover)?;
        writeln!(self.out, "Number of Assumptions: {}", assumptions)?;
        writeln!(self.out, "Timeout per check: {} seconds", format_seconds(timeout_ms))?;
        self.banner('-')
    }

    pub fn check_started(&mut self, index: usize, total: usize, display: &str) -> Result<()> {
        writeln!(self.out, "\n[Check {}/{}] Checking Conclusion:", index, total)?;
        writeln!(self.out, "  {}", display)?;
        Ok(())
    }

    pub fn check_finished(&mut self, verdict: Verdict, elapsed: Duration) -> Result<()> {
        let (word, explanation) = verdict.headline();
        let word = if self.color {
            match verdict {
                Verdict::Holds => word.green().bold().to_string(),
                Verdict::DoesntHold => word.red().bold().to_string(),
                Verdict::Unknown => word.yellow().bold().to_string(),
            }
        } else {
            word.to_string()
        };

        writeln!(
            self.out,
            "  Result: {} {} ({:.3}s)",
            word,
            explanation,
            elapsed.as_secs_f64()
        )?;
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }

    pub fn footer(&mut self) -> Result<()> {
        self.banner('-')?;
        writeln!(self.out, "Checks Complete.")?;
        self.banner('-')
    }

    pub fn summary(&mut self, assumptions: usize, outcomes: &[CheckOutcome]) -> Result<()> {
        writeln!(self.out)?;
        self.banner('=')?;
        writeln!(self.out, "SUMMARY OF CHECKS:")?;
        self.banner('=')?;
        writeln!(self.out, "Assumptions Used: {} axioms", assumptions)?;
        for (i, outcome) in outcomes.iter().enumerate() {
            writeln!(self.out, "Conclusion {}: [{}]", i + 1, outcome.display)?;
            writeln!(self.out, "  Result: {}", outcome.verdict)?;
        }
        self.banner('=')
    }
}

/// Machine-readable form of a whole run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckReport {
    pub prover: ProverKind,
    pub assumptions: Vec<String>,
    pub timeout_ms: u64,
    pub results: Vec<CheckOutcome>,
}
