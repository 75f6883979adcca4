// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Output formatting module for CLI
//!
//! Listings and the final check report, as coloured text or JSON

use anyhow::Result;
use colored::Colorize;
use hoopcheck::{Catalog, CheckReport, TheoryRegistry};
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow::anyhow!("Invalid output format: {}. Must be 'text' or 'json'", s)),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Output formatter for different output formats
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn section(&self, title: &str) {
        println!("\n{}", title.cyan().bold());
    }

    /// Catalog and theory listing for `hoopcheck list`
    pub fn output_listing(&self, catalog: &Catalog, registry: &TheoryRegistry, formulas: bool) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                self.section(&format!("Axioms ({})", catalog.len()));
                for axiom in catalog.iter() {
                    if formulas {
                        println!("  {:32} {}", axiom.name.bright_blue(), axiom.formula);
                    } else {
                        println!("  {:32} {}", axiom.name.bright_blue(), axiom.source.dimmed());
                    }
                }

                self.section("Theories");
                for theory in registry.iter() {
                    let names: Vec<&str> = theory.axioms.iter().map(|a| a.name.as_str()).collect();
                    println!("  {:24} {}", theory.name.magenta().bold(), theory.description);
                    println!("  {:24} [{}]", "", names.join(", ").dimmed());
                }
            }
            OutputFormat::Json => {
                let listing = Listing {
                    axioms: catalog
                        .iter()
                        .map(|a| AxiomEntry {
                            name: &a.name,
                            source: &a.source,
                            formula: a.formula.to_string(),
                        })
                        .collect(),
                    theories: registry
                        .iter()
                        .map(|t| TheoryEntry {
                            name: &t.name,
                            description: &t.description,
                            axioms: t.axioms.iter().map(|a| a.name.as_str()).collect(),
                        })
                        .collect(),
                };
                self.output_json(&listing)?;
            }
        }
        Ok(())
    }

    /// Output the report of a finished run
    ///
    /// Text runs have already printed their summary through the reporter.
    pub fn output_report(&self, report: &CheckReport) -> Result<()> {
        if self.format == OutputFormat::Json {
            self.output_json(report)?;
        }
        Ok(())
    }

    /// Output JSON
    fn output_json<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        println!("{}", json);
        Ok(())
    }
}

#[derive(Serialize)]
struct Listing<'a> {
    axioms: Vec<AxiomEntry<'a>>,
    theories: Vec<TheoryEntry<'a>>,
}

#[derive(Serialize)]
struct AxiomEntry<'a> {
    name: &'a str,
    source: &'a str,
    formula: String,
}

#[derive(Serialize)]
struct TheoryEntry<'a> {
    name: &'a str,
    description: &'a str,
    axioms: Vec<&'a str>,
}
