// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Mock prover backend for testing

use async_trait::async_trait;
use hoopcheck::core::Formula;
use hoopcheck::provers::{ProverBackend, ProverKind, ProverSession, SatResult};
use hoopcheck::Error;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A mock prover backend for testing
///
/// Answers come from a queue, one per `check_sat`, in the order they were
/// added. Every session records what was asserted into it.
pub struct MockProver {
    pub kind: ProverKind,
    pub version_string: String,
    pub sat_results: Arc<Mutex<VecDeque<anyhow::Result<SatResult>>>>,
    pub sessions: Arc<Mutex<Vec<SessionLog>>>,
    pub fail_render: bool,
}

/// What one session saw
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    pub timeout_ms: Option<u64>,
    pub assertions: Vec<Formula>,
    pub checked: bool,
}

impl MockProver {
    /// Create a new mock prover
    pub fn new(kind: ProverKind) -> Self {
        MockProver {
            kind,
            version_string: "Mock 1.0.0".to_string(),
            sat_results: Arc::new(Mutex::new(VecDeque::new())),
            sessions: Arc::new(Mutex::new(vec![])),
            fail_render: false,
        }
    }

    /// Mock whose `render` always fails
    pub fn failing_render(kind: ProverKind) -> Self {
        MockProver {
            fail_render: true,
            ..MockProver::new(kind)
        }
    }

    /// Add a satisfiability answer to return
    pub fn add_sat_result(&self, result: anyhow::Result<SatResult>) {
        self.sat_results.lock().unwrap().push_back(result);
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn session_log(&self, index: usize) -> SessionLog {
        self.sessions.lock().unwrap()[index].clone()
    }
}

struct MockSession {
    index: usize,
    sessions: Arc<Mutex<Vec<SessionLog>>>,
    sat_results: Arc<Mutex<VecDeque<anyhow::Result<SatResult>>>>,
}

#[async_trait]
impl ProverSession for MockSession {
    fn set_timeout(&mut self, timeout_ms: u64) {
        self.sessions.lock().unwrap()[self.index].timeout_ms = Some(timeout_ms);
    }

    fn assert(&mut self, formula: &Formula) {
        self.sessions.lock().unwrap()[self.index]
            .assertions
            .push(formula.clone());
    }

    async fn check_sat(&mut self) -> anyhow::Result<SatResult> {
        self.sessions.lock().unwrap()[self.index].checked = true;
        self.sat_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(SatResult::Unknown))
    }
}

#[async_trait]
impl ProverBackend for MockProver {
    fn kind(&self) -> ProverKind {
        self.kind
    }

    async fn version(&self) -> anyhow::Result<String> {
        Ok(self.version_string.clone())
    }

    fn session(&self) -> Box<dyn ProverSession> {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.push(SessionLog::default());
        Box::new(MockSession {
            index: sessions.len() - 1,
            sessions: Arc::clone(&self.sessions),
            sat_results: Arc::clone(&self.sat_results),
        })
    }

    fn render(&self, formula: &Formula) -> hoopcheck::Result<String> {
        if self.fail_render {
            Err(Error::FormatFailure("mock cannot render".to_string()))
        } else {
            Ok(formula.to_string())
        }
    }
}
