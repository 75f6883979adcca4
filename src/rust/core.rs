// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core term and formula model
//!
//! Terms live in a single uninterpreted sort. Formulas are equations over
//! terms combined with the few connectives the axiom catalog needs. The model
//! knows nothing about any particular solver: backends lower it themselves.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{BitAnd, Not, Shr};

use crate::error::{Error, Result};

/// Name of the uninterpreted domain sort
pub const DOMAIN_SORT: &str = "U";

/// A term over the domain sort
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Term {
    /// Variable bound by an enclosing quantifier
    Var(String),

    /// Distinguished constant element
    Const(String),

    /// Operator application op(args...)
    App { op: String, args: Vec<Term> },
}

impl Term {
    pub fn var(name: &str) -> Self {
        Term::Var(name.to_string())
    }

    pub fn constant(name: &str) -> Self {
        Term::Const(name.to_string())
    }

    /// Builds the equation `self == rhs`
    pub fn equals(&self, rhs: &Term) -> Formula {
        Formula::Equals(self.clone(), rhs.clone())
    }

    /// Returns the variable name if this term is a variable
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Term::Var(name) => Some(name),
            _ => None,
        }
    }

    /// Number of operator applications in the term
    pub fn depth_count(&self) -> usize {
        match self {
            Term::Var(_) | Term::Const(_) => 0,
            Term::App { args, .. } => 1 + args.iter().map(Term::depth_count).sum::<usize>(),
        }
    }

    /// Compact structural form, `op(op(a,b),c)`, without whitespace
    pub fn shape(&self) -> String {
        match self {
            Term::Var(name) | Term::Const(name) => name.clone(),
            Term::App { op, args } => {
                let args: Vec<String> = args.iter().map(Term::shape).collect();
                format!("{}({})", op, args.join(","))
            }
        }
    }

    fn write_sexpr(&self, out: &mut String) {
        match self {
            Term::Var(name) | Term::Const(name) => out.push_str(&symbol(name)),
            Term::App { op, args } => {
                out.push('(');
                out.push_str(&symbol(op));
                for arg in args {
                    out.push(' ');
                    arg.write_sexpr(out);
                }
                out.push(')');
            }
        }
    }

    fn collect_symbols(&self, bound: &[String], sig: &mut Signature) -> Result<()> {
        match self {
            Term::Var(name) if bound.contains(name) => Ok(()),
            // An unbound variable can only be read as a free constant
            Term::Var(name) | Term::Const(name) => sig.record(name, 0),
            Term::App { op, args } => {
                sig.record(op, args.len())?;
                for arg in args {
                    arg.collect_symbols(bound, sig)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(name) | Term::Const(name) => write!(f, "{}", name),
            Term::App { op, args } => {
                write!(f, "{}(", op)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A named binary operator over the domain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BinOp {
    name: String,
}

impl BinOp {
    pub fn new(name: &str) -> Self {
        BinOp {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds `op(a, b)`
    pub fn apply(&self, a: &Term, b: &Term) -> Term {
        Term::App {
            op: self.name.clone(),
            args: vec![a.clone(), b.clone()],
        }
    }

    /// Applies the operator left-associatively: `[a, b, c]` becomes `op(op(a, b), c)`.
    ///
    /// A single operand is returned unchanged. An empty slice is an
    /// [`Error::InvalidArity`].
    pub fn fold(&self, operands: &[&Term]) -> Result<Term> {
        let (first, rest) = operands.split_first().ok_or_else(|| Error::InvalidArity {
            op: self.name.clone(),
        })?;

        Ok(rest
            .iter()
            .fold((*first).clone(), |acc, operand| self.apply(&acc, operand)))
    }

    /// `t(a, b) := op(op(a, b), b)`
    pub fn t(&self, a: &Term, b: &Term) -> Term {
        self.apply(&self.apply(a, b), b)
    }

    /// `v(a, b) := t(t(a, b), a)`
    pub fn v(&self, a: &Term, b: &Term) -> Term {
        self.t(&self.t(a, b), a)
    }
}

/// A closed formula over the domain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Formula {
    Equals(Term, Term),
    Not(Box<Formula>),
    And(Vec<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    ForAll { vars: Vec<String>, body: Box<Formula> },
}

impl Formula {
    /// Universally quantifies `body` over the given variables.
    ///
    /// Terms that are not variables are skipped.
    pub fn forall(vars: &[&Term], body: Formula) -> Formula {
        Formula::ForAll {
            vars: vars
                .iter()
                .filter_map(|t| t.as_var())
                .map(str::to_string)
                .collect(),
            body: Box::new(body),
        }
    }

    pub fn and(parts: Vec<Formula>) -> Formula {
        Formula::And(parts)
    }

    pub fn implies(lhs: Formula, rhs: Formula) -> Formula {
        Formula::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn negate(&self) -> Formula {
        Formula::Not(Box::new(self.clone()))
    }

    /// Raw structural dump in S-expression form, used when a prover cannot
    /// render the formula itself
    pub fn sexpr(&self) -> String {
        let mut out = String::new();
        self.write_sexpr(&mut out);
        out
    }

    fn write_sexpr(&self, out: &mut String) {
        match self {
            Formula::Equals(lhs, rhs) => {
                out.push_str("(= ");
                lhs.write_sexpr(out);
                out.push(' ');
                rhs.write_sexpr(out);
                out.push(')');
            }
            Formula::Not(inner) => {
                out.push_str("(not ");
                inner.write_sexpr(out);
                out.push(')');
            }
            Formula::And(parts) if parts.is_empty() => out.push_str("true"),
            Formula::And(parts) => {
                out.push_str("(and");
                for part in parts {
                    out.push(' ');
                    part.write_sexpr(out);
                }
                out.push(')');
            }
            Formula::Implies(lhs, rhs) => {
                out.push_str("(=> ");
                lhs.write_sexpr(out);
                out.push(' ');
                rhs.write_sexpr(out);
                out.push(')');
            }
            Formula::ForAll { vars, body } if vars.is_empty() => body.write_sexpr(out),
            Formula::ForAll { vars, body } => {
                out.push_str("(forall (");
                for (i, var) in vars.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    out.push_str(&format!("({} {})", symbol(var), DOMAIN_SORT));
                }
                out.push_str(") ");
                body.write_sexpr(out);
                out.push(')');
            }
        }
    }

    /// Collects every operator and constant the formula mentions
    pub fn signature(&self) -> Result<Signature> {
        let mut sig = Signature::default();
        sig.extend(self)?;
        Ok(sig)
    }

    fn collect_symbols(&self, bound: &mut Vec<String>, sig: &mut Signature) -> Result<()> {
        match self {
            Formula::Equals(lhs, rhs) => {
                lhs.collect_symbols(bound, sig)?;
                rhs.collect_symbols(bound, sig)
            }
            Formula::Not(inner) => inner.collect_symbols(bound, sig),
            Formula::And(parts) => parts
                .iter()
                .try_for_each(|part| part.collect_symbols(bound, sig)),
            Formula::Implies(lhs, rhs) => {
                lhs.collect_symbols(bound, sig)?;
                rhs.collect_symbols(bound, sig)
            }
            Formula::ForAll { vars, body } => {
                let mark = bound.len();
                bound.extend(vars.iter().cloned());
                let res = body.collect_symbols(bound, sig);
                bound.truncate(mark);
                res
            }
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Equals(lhs, rhs) => write!(f, "{} == {}", lhs, rhs),
            Formula::Not(inner) => write!(f, "Not({})", inner),
            Formula::And(parts) => {
                write!(f, "And(")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", part)?;
                }
                write!(f, ")")
            }
            Formula::Implies(lhs, rhs) => write!(f, "Implies({}, {})", lhs, rhs),
            Formula::ForAll { vars, body } => match vars.as_slice() {
                [single] => write!(f, "ForAll({}, {})", single, body),
                _ => write!(f, "ForAll([{}], {})", vars.join(", "), body),
            },
        }
    }
}

impl Not for Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        Formula::Not(Box::new(self))
    }
}

impl BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Formula) -> Formula {
        match self {
            Formula::And(mut parts) => {
                parts.push(rhs);
                Formula::And(parts)
            }
            lhs => Formula::And(vec![lhs, rhs]),
        }
    }
}

/// `a >> b` reads as "a implies b"
impl Shr for Formula {
    type Output = Formula;

    fn shr(self, rhs: Formula) -> Formula {
        Formula::implies(self, rhs)
    }
}

/// Operators and constants used by a set of formulas, with their arities
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    symbols: BTreeMap<String, usize>,
}

impl Signature {
    /// Adds the symbols of `formula`, rejecting arity clashes
    pub fn extend(&mut self, formula: &Formula) -> Result<()> {
        formula.collect_symbols(&mut Vec::new(), self)
    }

    fn record(&mut self, name: &str, arity: usize) -> Result<()> {
        match self.symbols.get(name) {
            Some(&expected) if expected != arity => Err(Error::ArityMismatch {
                symbol: name.to_string(),
                expected,
                found: arity,
            }),
            Some(_) => Ok(()),
            None => {
                self.symbols.insert(name.to_string(), arity);
                Ok(())
            }
        }
    }

    pub fn arity(&self, name: &str) -> Option<usize> {
        self.symbols.get(name).copied()
    }

    /// Nullary symbols, in name order
    pub fn constants(&self) -> impl Iterator<Item = &str> {
        self.symbols
            .iter()
            .filter(|(_, arity)| **arity == 0)
            .map(|(name, _)| name.as_str())
    }

    /// Symbols with at least one argument, in name order
    pub fn functions(&self) -> impl Iterator<Item = (&str, usize)> {
        self.symbols
            .iter()
            .filter(|(_, arity)| **arity > 0)
            .map(|(name, &arity)| (name.as_str(), arity))
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Quotes a symbol for S-expression output when it is not a plain identifier
pub fn symbol(name: &str) -> String {
    let simple = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "~!@$%^&*_-+=<>.?/".contains(c));

    if simple {
        name.to_string()
    } else {
        format!("|{}|", name.replace('|', ""))
    }
}
