// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! SMT-LIB 2 lowering and solver process plumbing shared by the SMT backends
//!
//! A session buffers its assertions. `check_sat` renders them into one script,
//! runs a fresh solver process on it and reads back the status line.

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

use super::{ProverConfig, ProverKind, ProverSession, SatResult};
use crate::core::{symbol, Formula, Signature, DOMAIN_SORT};

/// Solver-specific parts of an SMT-LIB invocation
pub trait SmtDialect: Send + Sync {
    fn kind(&self) -> ProverKind;

    /// Logic to declare, if the solver needs one
    fn logic(&self) -> Option<&'static str>;

    /// Arguments that make the solver read a script from stdin
    fn stdin_args(&self) -> Vec<String>;

    /// Arguments that bound a single query to `timeout_ms`
    fn timeout_args(&self, timeout_ms: u64) -> Vec<String>;
}

/// Renders a complete script asserting every formula, then `check-sat`
pub fn render_script(logic: Option<&str>, assertions: &[Formula]) -> crate::Result<String> {
    let mut sig = Signature::default();
    for formula in assertions {
        sig.extend(formula)?;
    }

    let mut script = String::new();
    if let Some(logic) = logic {
        script.push_str(&format!("(set-logic {})\n", logic));
    }
    script.push_str(&format!("(declare-sort {} 0)\n", DOMAIN_SORT));

    for (name, arity) in sig.functions() {
        let params = vec![DOMAIN_SORT; arity].join(" ");
        script.push_str(&format!(
            "(declare-fun {} ({}) {})\n",
            symbol(name),
            params,
            DOMAIN_SORT
        ));
    }
    for name in sig.constants() {
        script.push_str(&format!("(declare-const {} {})\n", symbol(name), DOMAIN_SORT));
    }

    for formula in assertions {
        script.push_str(&format!("(assert {})\n", formula.sexpr()));
    }

    script.push_str("(check-sat)\n(exit)\n");
    Ok(script)
}

/// Parses solver output for the answer to a single `check-sat`
pub fn parse_response(kind: ProverKind, output: &str) -> Result<SatResult> {
    let mut lines = output.lines().map(str::trim).filter(|l| !l.is_empty());

    if let Some(error) = output.lines().map(str::trim).find(|l| l.starts_with("(error")) {
        let msg = error
            .trim_start_matches("(error")
            .trim_end_matches(')')
            .trim()
            .trim_matches('"');
        bail!("{} reported an error: {}", kind, msg);
    }

    match lines.find(|l| matches!(*l, "sat" | "unsat" | "unknown" | "timeout")) {
        Some("sat") => Ok(SatResult::Sat),
        Some("unsat") => Ok(SatResult::Unsat),
        Some(_) => Ok(SatResult::Unknown),
        None => Err(anyhow!(
            "{} gave no check-sat answer: {}",
            kind,
            output.lines().take(10).collect::<Vec<_>>().join("\n")
        )),
    }
}

/// Session that runs one solver process per `check_sat`
pub struct SmtSession<D: SmtDialect> {
    dialect: D,
    config: ProverConfig,
    timeout_ms: u64,
    assertions: Vec<Formula>,
}

impl<D: SmtDialect> SmtSession<D> {
    pub fn new(dialect: D, config: ProverConfig) -> Self {
        let timeout_ms = config.timeout_ms;
        SmtSession {
            dialect,
            config,
            timeout_ms,
            assertions: vec![],
        }
    }

    /// Script that `check_sat` would send
    pub fn script(&self) -> crate::Result<String> {
        render_script(self.dialect.logic(), &self.assertions)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.config.executable);
        cmd.args(self.dialect.stdin_args())
            .args(self.dialect.timeout_args(self.timeout_ms))
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl<D: SmtDialect> ProverSession for SmtSession<D> {
    fn set_timeout(&mut self, timeout_ms: u64) {
        self.timeout_ms = timeout_ms;
    }

    fn assert(&mut self, formula: &Formula) {
        self.assertions.push(formula.clone());
    }

    async fn check_sat(&mut self) -> Result<SatResult> {
        let kind = self.dialect.kind();
        let script = self.script()?;
        debug!("{} script:\n{}", kind, script);

        let mut child = self.command().spawn().with_context(|| {
            format!("Failed to spawn {} process: {:?}", kind, self.config.executable)
        })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("Failed to open {} stdin", kind))?;
        stdin.write_all(script.as_bytes()).await?;
        stdin.flush().await?;
        drop(stdin);

        let limit =
            Duration::from_millis(self.timeout_ms.saturating_add(self.config.kill_grace_ms));
        let output = match timeout(limit, child.wait_with_output()).await {
            Ok(output) => output.with_context(|| format!("Failed to read {} output", kind))?,
            Err(_) => {
                warn!("{} ignored its {} ms limit, killed after {:?}", kind, self.timeout_ms, limit);
                return Ok(SatResult::Unknown);
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("{} answered: {}", kind, stdout.trim());

        match parse_response(kind, &stdout) {
            Ok(result) => Ok(result),
            Err(e) if !output.status.success() => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(e.context(format!("{} exited with {}: {}", kind, output.status, stderr.trim())))
            }
            Err(e) => Err(e),
        }
    }
}

/// Runs `<executable> --version` and returns the first non-empty line
pub async fn version(kind: ProverKind, config: &ProverConfig) -> Result<String> {
    let output = Command::new(&config.executable)
        .arg("--version")
        .output()
        .await
        .with_context(|| format!("Failed to get {} version", kind))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("unknown")
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BinOp, Term};

    fn reflexivity() -> Formula {
        let x = Term::var("x");
        let f = BinOp::new("f");
        Formula::forall(&[&x], f.apply(&x, &x).equals(&Term::constant("e")))
    }

    #[test]
    fn test_render_script_declares_signature() {
        let refl = reflexivity();
        let script = render_script(None, &[refl.clone(), refl.negate()]).unwrap();

        assert_eq!(
            script,
            "(declare-sort U 0)\n\
             (declare-fun f (U U) U)\n\
             (declare-const e U)\n\
             (assert (forall ((x U)) (= (f x x) e)))\n\
             (assert (not (forall ((x U)) (= (f x x) e))))\n\
             (check-sat)\n\
             (exit)\n"
        );
    }

    #[test]
    fn test_render_script_with_logic() {
        let script = render_script(Some("UF"), &[reflexivity()]).unwrap();
        assert!(script.starts_with("(set-logic UF)\n(declare-sort U 0)\n"));
    }

    #[test]
    fn test_parse_statuses() {
        assert_eq!(parse_response(ProverKind::Z3, "unsat\n").unwrap(), SatResult::Unsat);
        assert_eq!(parse_response(ProverKind::Z3, "sat\n").unwrap(), SatResult::Sat);
        assert_eq!(parse_response(ProverKind::Z3, "unknown\n").unwrap(), SatResult::Unknown);
        assert_eq!(parse_response(ProverKind::Z3, "timeout\n").unwrap(), SatResult::Unknown);
        assert_eq!(
            parse_response(ProverKind::CVC5, "\n  unsat  \n").unwrap(),
            SatResult::Unsat
        );
    }

    #[test]
    fn test_parse_rejects_errors_even_with_answer() {
        let out = "(error \"line 3 column 9: unknown constant q\")\nsat\n";
        let err = parse_response(ProverKind::Z3, out).unwrap_err();
        assert!(err.to_string().contains("unknown constant q"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_response(ProverKind::Z3, "").is_err());
        assert!(parse_response(ProverKind::Z3, "segfault").is_err());
    }
}
