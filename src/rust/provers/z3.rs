// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Z3 SMT Solver Backend
//!
//! Drives `z3 -in -smt2` with one process per session. The per-query budget
//! is passed as Z3's soft timeout (`-t:<ms>`), so an exhausted budget comes
//! back as `unknown` rather than as a killed process.

use async_trait::async_trait;
use anyhow::Result;

use super::smtlib::{self, SmtDialect, SmtSession};
use super::{ProverBackend, ProverConfig, ProverKind, ProverSession};

#[derive(Debug, Clone, Copy, Default)]
pub struct Z3Dialect;

impl SmtDialect for Z3Dialect {
    fn kind(&self) -> ProverKind {
        ProverKind::Z3
    }

    fn logic(&self) -> Option<&'static str> {
        // Z3 picks its own strategy for quantified UF
        None
    }

    fn stdin_args(&self) -> Vec<String> {
        vec!["-in".to_string(), "-smt2".to_string()]
    }

    fn timeout_args(&self, timeout_ms: u64) -> Vec<String> {
        vec![format!("-t:{}", timeout_ms)]
    }
}

/// Z3 SMT solver backend
pub struct Z3Backend {
    config: ProverConfig,
}

impl Z3Backend {
    /// Create a new Z3 backend with configuration
    pub fn new(config: ProverConfig) -> Self {
        Z3Backend { config }
    }
}

#[async_trait]
impl ProverBackend for Z3Backend {
    fn kind(&self) -> ProverKind {
        ProverKind::Z3
    }

    async fn version(&self) -> Result<String> {
        smtlib::version(ProverKind::Z3, &self.config).await
    }

    fn session(&self) -> Box<dyn ProverSession> {
        Box::new(SmtSession::new(Z3Dialect, self.config.clone()))
    }
}
