// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! CVC5 SMT solver backend
//!
//! Same SMT-LIB lowering as the Z3 backend. Finite model finding is switched
//! on so that countermodels over the uninterpreted sort are reported as `sat`
//! instead of `unknown`.

use async_trait::async_trait;
use anyhow::Result;

use super::smtlib::{self, SmtDialect, SmtSession};
use super::{ProverBackend, ProverConfig, ProverKind, ProverSession};

#[derive(Debug, Clone, Copy, Default)]
pub struct Cvc5Dialect;

impl SmtDialect for Cvc5Dialect {
    fn kind(&self) -> ProverKind {
        ProverKind::CVC5
    }

    fn logic(&self) -> Option<&'static str> {
        Some("UF")
    }

    fn stdin_args(&self) -> Vec<String> {
        vec!["--lang=smt2".to_string(), "--finite-model-find".to_string()]
    }

    fn timeout_args(&self, timeout_ms: u64) -> Vec<String> {
        vec![format!("--tlimit-per={}", timeout_ms)]
    }
}

/// CVC5 SMT solver backend
pub struct Cvc5Backend {
    config: ProverConfig,
}

impl Cvc5Backend {
    pub fn new(config: ProverConfig) -> Self {
        Cvc5Backend { config }
    }
}

#[async_trait]
impl ProverBackend for Cvc5Backend {
    fn kind(&self) -> ProverKind {
        ProverKind::CVC5
    }

    async fn version(&self) -> Result<String> {
        smtlib::version(ProverKind::CVC5, &self.config).await
    }

    fn session(&self) -> Box<dyn ProverSession> {
        Box::new(SmtSession::new(Cvc5Dialect, self.config.clone()))
    }
}
