// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! hoopcheck CLI - Main binary entry point
//!
//! Runs an entailment experiment, or lists the axiom catalog and theories

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hoopcheck::{
    Catalog, CheckReport, EntailmentChecker, ExperimentConfig, ProverConfig, ProverFactory,
    ProverKind, Reporter, TheoryRegistry,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, info, warn};

mod output;

use output::{OutputFormat, OutputFormatter};

/// hoopcheck - check which axioms of residuated structures entail which
#[derive(Parser)]
#[command(name = "hoopcheck")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Prover to use (z3, cvc5)
    #[arg(short, long)]
    prover: Option<ProverKind>,

    /// Prover executable path (override default)
    #[arg(long)]
    executable: Option<PathBuf>,

    /// Timeout per check in milliseconds
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Extra time before a stuck solver is killed, in milliseconds
    #[arg(long, default_value = "5000")]
    kill_grace_ms: u64,

    /// Experiment file (TOML)
    #[arg(short, long)]
    experiment: Option<PathBuf>,

    /// Theory to assume (repeatable)
    #[arg(long = "theory")]
    theories: Vec<String>,

    /// Single axiom to assume (repeatable)
    #[arg(long = "assume")]
    assumptions: Vec<String>,

    /// Conclusion to check (repeatable)
    #[arg(long = "conclusion")]
    conclusions: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the axiom catalog and the named theories
    List {
        /// Show formulas instead of sources
        #[arg(short, long)]
        formulas: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Colour only on an interactive terminal
    let color = !cli.no_color && std::io::stdout().is_terminal();
    if !color {
        colored::control::set_override(false);
    }

    let formatter = OutputFormatter::new(cli.format);

    let catalog = Catalog::build().context("Failed to build axiom catalog")?;
    let registry = TheoryRegistry::build(&catalog).context("Failed to build theories")?;
    debug!("Catalog: {} axioms", catalog.len());

    match &cli.command {
        Some(Commands::List { formulas }) => {
            formatter.output_listing(&catalog, &registry, *formulas)?;
        }
        None => {
            check_command(&cli, &catalog, &registry, &formatter, color).await?;
        }
    }

    Ok(())
}

/// Initialize tracing/logging
///
/// Logs go to stderr so they never interleave with the report on stdout.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::{fmt, prelude::*};

    let filter = if verbose {
        EnvFilter::new("hoopcheck=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hoopcheck=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Selection from the experiment file (or the built-in one) with the command
/// line applied on top
async fn experiment_config(cli: &Cli) -> Result<ExperimentConfig> {
    let base = match &cli.experiment {
        Some(path) => {
            info!("Loading experiment from {}", path.display());
            ExperimentConfig::load(path).await?
        }
        None => ExperimentConfig::builtin(),
    };

    Ok(base.merge(ExperimentConfig {
        prover: cli.prover,
        timeout_ms: cli.timeout_ms,
        theories: cli.theories.clone(),
        assumptions: cli.assumptions.clone(),
        conclusions: cli.conclusions.clone(),
    }))
}

/// Check command implementation
async fn check_command(
    cli: &Cli,
    catalog: &Catalog,
    registry: &TheoryRegistry,
    formatter: &OutputFormatter,
    color: bool,
) -> Result<()> {
    let selection = experiment_config(cli).await?;
    let kind = selection.prover.unwrap_or(ProverKind::Z3);
    let config = create_config(kind, cli.executable.clone(), cli.kill_grace_ms);
    let experiment = selection.resolve(catalog, registry, config.timeout_ms)?;

    if experiment.conclusions.is_empty() {
        warn!("No conclusions selected, nothing to check");
    }

    let prover = ProverFactory::create(kind, config).context("Failed to create prover backend")?;
    match prover.version().await {
        Ok(version) => info!("Using {}", version),
        Err(e) => warn!("Could not query {} version: {}", kind, e),
    }

    let checker = EntailmentChecker::new(prover.as_ref());
    let outcomes = match formatter.format() {
        OutputFormat::Text => {
            let mut reporter = Reporter::new(std::io::stdout()).with_color(color);
            let outcomes = checker
                .check(
                    &experiment.assumptions,
                    &experiment.conclusions,
                    experiment.timeout_ms,
                    &mut reporter,
                )
                .await?;
            reporter.summary(experiment.assumptions.len(), &outcomes)?;
            outcomes
        }
        OutputFormat::Json => {
            let mut reporter = Reporter::silent();
            checker
                .check(
                    &experiment.assumptions,
                    &experiment.conclusions,
                    experiment.timeout_ms,
                    &mut reporter,
                )
                .await?
        }
    };

    let report = CheckReport {
        prover: kind,
        assumptions: experiment.assumptions.iter().map(|a| a.name.clone()).collect(),
        timeout_ms: experiment.timeout_ms,
        results: outcomes,
    };
    formatter.output_report(&report)?;

    Ok(())
}

/// Create prover configuration
fn create_config(kind: ProverKind, executable: Option<PathBuf>, kill_grace_ms: u64) -> ProverConfig {
    let mut config = ProverConfig::for_kind(kind);
    if let Some(exec) = executable {
        config.executable = exec;
    }
    config.kill_grace_ms = kill_grace_ms;
    config
}
