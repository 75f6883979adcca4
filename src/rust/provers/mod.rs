// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Decision procedure backends
//!
//! The checker only sees the [`ProverBackend`] and [`ProverSession`] traits.
//! Each session is an isolated solver context: nothing asserted in one
//! session is visible to another.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::core::Formula;

pub mod cvc5;
pub mod smtlib;
pub mod z3;

/// Enumeration of supported solvers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProverKind {
    Z3,
    CVC5,
}

impl std::str::FromStr for ProverKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "z3" => Ok(ProverKind::Z3),
            "cvc5" => Ok(ProverKind::CVC5),
            _ => Err(anyhow::anyhow!("Unknown prover: {}", s)),
        }
    }
}

impl fmt::Display for ProverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProverKind::Z3 => write!(f, "Z3"),
            ProverKind::CVC5 => write!(f, "CVC5"),
        }
    }
}

impl ProverKind {
    pub fn all() -> Vec<ProverKind> {
        vec![ProverKind::Z3, ProverKind::CVC5]
    }

    /// Executable looked up on PATH when none is configured
    pub fn default_executable(&self) -> PathBuf {
        match self {
            ProverKind::Z3 => PathBuf::from("z3"),
            ProverKind::CVC5 => PathBuf::from("cvc5"),
        }
    }
}

/// Outcome of a satisfiability query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SatResult {
    Sat,
    Unsat,
    /// Resource limit reached or the solver gave up
    Unknown,
}

impl fmt::Display for SatResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SatResult::Sat => write!(f, "sat"),
            SatResult::Unsat => write!(f, "unsat"),
            SatResult::Unknown => write!(f, "unknown"),
        }
    }
}

/// Configuration for a prover backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProverConfig {
    /// Path to prover executable
    pub executable: PathBuf,

    /// Additional arguments
    pub args: Vec<String>,

    /// Default per-check timeout in milliseconds
    pub timeout_ms: u64,

    /// Extra wall-clock time granted past the solver's own limit before the
    /// process is killed
    ///
    /// A safety net only: the solver owns the timeout and normally answers
    /// `unknown` itself well before this fires.
    pub kill_grace_ms: u64,
}

impl Default for ProverConfig {
    fn default() -> Self {
        ProverConfig {
            executable: PathBuf::new(),
            args: vec![],
            timeout_ms: 1000,
            kill_grace_ms: 5000,
        }
    }
}

impl ProverConfig {
    pub fn for_kind(kind: ProverKind) -> Self {
        ProverConfig {
            executable: kind.default_executable(),
            ..Default::default()
        }
    }
}

/// A single isolated solver context
#[async_trait]
pub trait ProverSession: Send {
    /// Per-query budget in milliseconds
    fn set_timeout(&mut self, timeout_ms: u64);

    /// Adds a hard constraint
    fn assert(&mut self, formula: &Formula);

    /// Decides satisfiability of everything asserted so far
    async fn check_sat(&mut self) -> anyhow::Result<SatResult>;
}

/// Universal trait for decision procedure backends
#[async_trait]
pub trait ProverBackend: Send + Sync {
    fn kind(&self) -> ProverKind;

    /// Get prover version
    async fn version(&self) -> anyhow::Result<String>;

    /// Opens a fresh session sharing no state with earlier ones
    fn session(&self) -> Box<dyn ProverSession>;

    /// Renders a formula for display
    fn render(&self, formula: &Formula) -> crate::Result<String> {
        Ok(formula.to_string())
    }
}

/// Factory for creating prover backends
pub struct ProverFactory;

impl ProverFactory {
    pub fn create(kind: ProverKind, config: ProverConfig) -> anyhow::Result<Box<dyn ProverBackend>> {
        match kind {
            ProverKind::Z3 => Ok(Box::new(z3::Z3Backend::new(config))),
            ProverKind::CVC5 => Ok(Box::new(cvc5::Cvc5Backend::new(config))),
        }
    }
}
