// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for hoopcheck

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A left-associative application was requested with no operands
    #[error("operator '{op}' requires at least one operand")]
    InvalidArity { op: String },

    /// The same symbol is applied with two different numbers of arguments
    #[error("symbol '{symbol}' used with arity {found}, previously {expected}")]
    ArityMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },

    #[error("unknown axiom: {0}")]
    UnknownAxiom(String),

    #[error("unknown theory: {0}")]
    UnknownTheory(String),

    /// A prover could not render a formula for display
    #[error("could not format formula: {0}")]
    FormatFailure(String),
}

pub type Result<T> = std::result::Result<T, Error>;
