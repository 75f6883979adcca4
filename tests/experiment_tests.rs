// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Experiment files and their resolution against the catalog

mod common;

use common::mock_prover::MockProver;
use hoopcheck::provers::{ProverKind, SatResult};
use hoopcheck::{Catalog, EntailmentChecker, ExperimentConfig, Reporter, TheoryRegistry, Verdict};
use std::io::Write;

fn tables() -> (Catalog, TheoryRegistry) {
    let catalog = Catalog::build().unwrap();
    let registry = TheoryRegistry::build(&catalog).unwrap();
    (catalog, registry)
}

#[tokio::test]
async fn test_checked_in_experiments_resolve() {
    let (catalog, registry) = tables();
    let mut seen = 0;

    for entry in std::fs::read_dir(common::experiments_dir()).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().map_or(true, |ext| ext != "toml") {
            continue;
        }

        let config = ExperimentConfig::load(&path).await.unwrap();
        let experiment = config
            .resolve(&catalog, &registry, 1000)
            .unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
        assert!(!experiment.conclusions.is_empty(), "{}", path.display());
        seen += 1;
    }

    assert!(seen >= 1);
}

#[tokio::test]
async fn test_builtin_file_matches_builtin_selection() {
    let path = common::experiments_dir().join("wrc_antisymmetry.toml");
    let config = ExperimentConfig::load(&path).await.unwrap();
    assert_eq!(config, ExperimentConfig::builtin());
}

#[tokio::test]
async fn test_load_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
timeout_ms = 400
theories = ["johnstone_j"]
assumptions = ["a9_idemp"]
conclusions = ["a11_t"]
"#
    )
    .unwrap();

    let (catalog, registry) = tables();
    let config = ExperimentConfig::load(file.path()).await.unwrap();
    let experiment = config.resolve(&catalog, &registry, 1000).unwrap();

    let names: Vec<&str> = experiment.assumptions.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["a5_refl", "a6_unit_red", "a19_mono_div", "a9_idemp"]);
    assert_eq!(experiment.timeout_ms, 400);
    assert_eq!(config.prover, None);
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ExperimentConfig::load(&dir.path().join("absent.toml"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read experiment file"));
}

#[tokio::test]
async fn test_unknown_axiom_in_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "conclusions = [\"a99_missing\"]").unwrap();

    let (catalog, registry) = tables();
    let config = ExperimentConfig::load(file.path()).await.unwrap();
    let err = config.resolve(&catalog, &registry, 1000).unwrap_err();
    assert!(err.to_string().contains("unknown axiom: a99_missing"));
}

#[tokio::test]
async fn test_resolved_experiment_runs_through_checker() {
    let (catalog, registry) = tables();
    let experiment = ExperimentConfig::builtin()
        .resolve(&catalog, &registry, 1000)
        .unwrap();

    let mock = MockProver::new(ProverKind::Z3);
    mock.add_sat_result(Ok(SatResult::Unknown));

    let checker = EntailmentChecker::new(&mock);
    let mut reporter = Reporter::new(Vec::new());
    let outcomes = checker
        .check(
            &experiment.assumptions,
            &experiment.conclusions,
            experiment.timeout_ms,
            &mut reporter,
        )
        .await
        .unwrap();
    reporter.summary(experiment.assumptions.len(), &outcomes).unwrap();

    assert_eq!(outcomes[0].verdict, Verdict::Unknown);
    assert_eq!(mock.session_log(0).assertions.len(), 5);

    let text = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(text.contains("Number of Assumptions: 4"));
    assert!(text.contains("Timeout per check: 1.0 seconds"));
    assert!(text.contains("Result: UNKNOWN (Timeout or resource limit?)"));
    assert!(text.contains("Assumptions Used: 4 axioms"));
    assert!(text.contains("  Result: unknown"));
}
