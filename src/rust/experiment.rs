// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Experiment selection
//!
//! An experiment names the assumptions (whole theories plus single axioms)
//! and the conclusions to check. Without any input the built-in selection is
//! used; a TOML file or command-line flags can replace parts of it:
//!
//! ```toml
//! prover = "z3"
//! timeout_ms = 1000
//! theories = ["wrc_p"]
//! assumptions = ["quasi_antisym_p"]
//! conclusions = ["rc3_t_antisymmetry_e"]
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::{Axiom, Catalog};
use crate::provers::ProverKind;
use crate::theory::TheoryRegistry;

/// Unresolved selection, by catalog and theory names
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    pub prover: Option<ProverKind>,
    pub timeout_ms: Option<u64>,
    /// Theories whose axioms are assumed, in order
    pub theories: Vec<String>,
    /// Single axioms assumed after the theories
    pub assumptions: Vec<String>,
    pub conclusions: Vec<String>,
}

impl ExperimentConfig {
    /// Weak relative closure with anti-symmetry of `p`, asked whether
    /// t-anti-symmetry follows
    pub fn builtin() -> Self {
        ExperimentConfig {
            prover: Some(ProverKind::Z3),
            timeout_ms: Some(1000),
            theories: vec!["wrc_p".to_string()],
            assumptions: vec!["quasi_antisym_p".to_string()],
            conclusions: vec!["rc3_t_antisymmetry_e".to_string()],
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid experiment file")
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read experiment file: {:?}", path))?;
        Self::from_toml_str(&content)
    }

    /// Applies `overrides` on top of this selection.
    ///
    /// Giving any theory or assumption replaces both lists; giving any
    /// conclusion replaces the conclusions.
    pub fn merge(mut self, overrides: ExperimentConfig) -> Self {
        if overrides.prover.is_some() {
            self.prover = overrides.prover;
        }
        if overrides.timeout_ms.is_some() {
            self.timeout_ms = overrides.timeout_ms;
        }
        if !overrides.theories.is_empty() || !overrides.assumptions.is_empty() {
            self.theories = overrides.theories;
            self.assumptions = overrides.assumptions;
        }
        if !overrides.conclusions.is_empty() {
            self.conclusions = overrides.conclusions;
        }
        self
    }

    /// Looks every name up, falling back to `default_timeout_ms`
    pub fn resolve(
        &self,
        catalog: &Catalog,
        registry: &TheoryRegistry,
        default_timeout_ms: u64,
    ) -> Result<Experiment> {
        let mut assumptions = Vec::new();
        for name in &self.theories {
            assumptions.extend(registry.get(name)?.axioms.iter().cloned());
        }
        assumptions.extend(catalog.select(&self.assumptions)?);

        let conclusions = catalog.select(&self.conclusions)?;

        let timeout_ms = self.timeout_ms.unwrap_or(default_timeout_ms);
        if timeout_ms == 0 {
            bail!("Timeout must be a positive number of milliseconds");
        }

        Ok(Experiment {
            assumptions,
            conclusions,
            timeout_ms,
        })
    }
}

/// Resolved selection, ready for the checker
#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    pub assumptions: Vec<Axiom>,
    pub conclusions: Vec<Axiom>,
    pub timeout_ms: u64,
}
