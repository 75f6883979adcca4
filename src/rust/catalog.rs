// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Axiom catalog
//!
//! Candidate laws for implication algebras, hoops and relative closure
//! operators. Source labels refer to the numbering of "Semi-abelian by
//! Design: Johnstone Algebras Unifying Implication and Division"
//! (Example 1.3 and Definition 1.11).
//!
//! Order relations on the generic operation `p` are encoded as equations:
//! `L <= R` becomes `p(L, R) == R`. Names ending in `_e` are the purely
//! equational variants.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{BinOp, Formula, Term};
use crate::error::{Error, Result};

/// Operators, constant and variables the catalog is written in
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Implication
    pub f: BinOp,
    /// Multiplication
    pub m: BinOp,
    /// Generic operation of relative closure
    pub p: BinOp,
    pub e: Term,
    pub x: Term,
    pub y: Term,
    pub z: Term,
    pub w: Term,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary {
            f: BinOp::new("f"),
            m: BinOp::new("m"),
            p: BinOp::new("p"),
            e: Term::constant("e"),
            x: Term::var("x"),
            y: Term::var("y"),
            z: Term::var("z"),
            w: Term::var("w"),
        }
    }
}

/// A named formula
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Axiom {
    pub name: String,
    /// Where the law comes from, for listings
    pub source: String,
    pub formula: Formula,
}

impl Axiom {
    pub fn new(name: &str, source: &str, formula: Formula) -> Self {
        Axiom {
            name: name.to_string(),
            source: source.to_string(),
            formula,
        }
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formula)
    }
}

/// Read-only table of every known axiom, in definition order
#[derive(Debug, Clone)]
pub struct Catalog {
    axioms: Vec<Axiom>,
}

impl Catalog {
    /// Builds the full catalog over the default vocabulary
    pub fn build() -> Result<Self> {
        Self::build_with(&Vocabulary::default())
    }

    pub fn build_with(vocab: &Vocabulary) -> Result<Self> {
        let Vocabulary { f, m, p, e, x, y, z, .. } = vocab;
        let ff = |a: &Term, b: &Term| f.apply(a, b);
        let mm = |a: &Term, b: &Term| m.apply(a, b);
        let pp = |a: &Term, b: &Term| p.apply(a, b);
        let forall = Formula::forall;

        let mut axioms = Vec::new();
        let mut add = |name: &str, source: &str, formula: Formula| {
            axioms.push(Axiom::new(name, source, formula));
        };

        // Example 1.3, over f, m and e
        add(
            "a1_assoc",
            "Example 1.3 (1)",
            forall(&[x, y, z], m.fold(&[x, y, z])?.equals(&mm(x, &mm(y, z)))),
        );
        add("a2_right_id", "Example 1.3 (2)", forall(&[x], mm(x, e).equals(x)));
        add("a3_left_id", "Example 1.3 (3)", forall(&[x], mm(e, x).equals(x)));
        add(
            "a4_comm",
            "Example 1.3 (4)",
            forall(&[x, y], mm(x, y).equals(&mm(y, x))),
        );
        add("a5_refl", "Example 1.3 (5)", forall(&[x], ff(x, x).equals(e)));
        add("a6_unit_red", "Example 1.3 (6)", forall(&[x], ff(e, x).equals(x)));
        add(
            "a7_hoop_sym",
            "Example 1.3 (7)",
            forall(&[x, y], mm(x, &ff(x, y)).equals(&mm(y, &ff(y, x)))),
        );
        add(
            "a8_resid",
            "Example 1.3 (8)",
            forall(&[x, y, z], ff(x, &ff(y, z)).equals(&ff(&mm(y, x), z))),
        );
        add("a9_idemp", "Example 1.3 (9)", forall(&[x], mm(x, x).equals(x)));
        add(
            "a10_fusion",
            "Example 1.3 (10)",
            forall(&[x, y], mm(x, y).equals(&mm(y, &ff(y, x)))),
        );
        add("a11_t", "Example 1.3 (11)", forall(&[x], ff(x, e).equals(e)));
        add(
            "a12_lower_div",
            "Example 1.3 (12)",
            forall(&[x, y], mm(x, &ff(x, y)).equals(y)),
        );
        add(
            "a13_upper_div",
            "Example 1.3 (13)",
            forall(&[x, y], ff(x, &mm(x, y)).equals(y)),
        );
        add(
            "a14_k",
            "Example 1.3 (14)",
            forall(&[x, y], ff(x, &ff(y, x)).equals(e)),
        );
        add(
            "a15_mp",
            "Example 1.3 (15)",
            forall(&[x, y], ff(x, &f.t(x, y)).equals(e)),
        );
        add(
            "a16_c",
            "Example 1.3 (16)",
            forall(&[x, y, z], ff(x, &ff(y, z)).equals(&ff(y, &ff(x, z)))),
        );
        add(
            "a17_b",
            "Example 1.3 (17)",
            forall(
                &[x, y, z],
                f.fold(&[&ff(x, y), &ff(&ff(z, x), &ff(z, y))])?.equals(e),
            ),
        );
        add(
            "a18_s",
            "Example 1.3 (18)",
            forall(
                &[x, y, z],
                f.fold(&[&ff(z, &ff(x, y)), &ff(&ff(z, x), &ff(z, y))])?
                    .equals(e),
            ),
        );
        add(
            "a19_mono_div",
            "Example 1.3 (19)",
            forall(
                &[x, y],
                mm(&f.t(x, y), &ff(&f.t(x, y), x)).equals(x),
            ),
        );
        add(
            "a20_h",
            "Example 1.3 (20)",
            forall(
                &[x, y, z],
                ff(&ff(x, y), &ff(x, z)).equals(&ff(&ff(y, x), &ff(y, z))),
            ),
        );
        add(
            "a21_m",
            "Example 1.3 (21)",
            forall(
                &[x, y, z],
                ff(&ff(&f.t(x, y), x), &ff(&f.t(x, y), z)).equals(&ff(x, z)),
            ),
        );
        add(
            "a22_cornish_j",
            "Example 1.3 (22)",
            forall(&[x, y], f.v(x, y).equals(&f.v(y, x))),
        );

        // Quasi-identities and equational anti-symmetry for f
        add(
            "quasi_antisym_f",
            "Quasi-identity: anti-symmetry of f",
            forall(
                &[x, y],
                (ff(x, y).equals(e) & ff(y, x).equals(e)) >> x.equals(y),
            ),
        );
        add(
            "quasi_transitive_f",
            "Quasi-identity: transitivity of f",
            forall(
                &[x, y, z],
                (ff(x, y).equals(e) & ff(y, z).equals(e)) >> ff(x, z).equals(e),
            ),
        );
        add(
            "ias_equational_f",
            "Equational anti-symmetry of f",
            forall(&[x, y], f.v(x, y).equals(&f.t(&f.v(x, y), y))),
        );

        // Definition 1.11, relative closure over p
        add(
            "rc1_t_reflexivity_e",
            "Definition 1.11 (1) E",
            forall(&[x], x.equals(&pp(x, x))),
        );
        add(
            "rc2_t_transitivity_e",
            "Definition 1.11 (2) E",
            forall(
                &[x, y, z],
                p.fold(&[x, &p.fold(&[x, y, z])?])?
                    .equals(&p.fold(&[x, y, z])?),
            ),
        );
        add(
            "rc3_t_antisymmetry_e",
            "Definition 1.11 (3) E",
            forall(&[x, y], p.fold(&[x, y, x])?.equals(&p.fold(&[x, y, x, y])?)),
        );
        add(
            "rc4_left_absorption_e",
            "Definition 1.11 (4) E",
            forall(&[x, y], pp(x, &pp(x, y)).equals(&pp(x, y))),
        );
        add(
            "rc5_right_absorption",
            "Definition 1.11 (5) <=",
            forall(&[x, y], p.fold(&[x, y, y, &pp(x, y)])?.equals(&pp(x, y))),
        );
        add(
            "rc5_right_absorption_e",
            "Definition 1.11 (5) E",
            forall(&[x, y], p.fold(&[x, y, y])?.equals(&pp(x, y))),
        );
        add(
            "rc6_left_monotonicity",
            "Definition 1.11 (6) <=",
            forall(
                &[x, y, z],
                p.fold(&[x, z, &p.fold(&[x, y, z])?])?
                    .equals(&p.fold(&[x, y, z])?),
            ),
        );
        add(
            "rc7_flattening",
            "Definition 1.11 (7) E",
            forall(&[x, y, z], pp(&pp(x, y), &pp(x, z)).equals(&pp(&pp(x, y), z))),
        );

        let xyz = p.fold(&[x, y, z])?;
        let xyzx = p.fold(&[x, y, z, x])?;
        let closure_xyz = p.fold(&[&xyz, &pp(x, y)])?;
        add(
            "rc8_closure_stability",
            "Definition 1.11 (8) <=",
            forall(
                &[x, y, z],
                p.fold(&[&closure_xyz, x, &xyzx])?.equals(&xyzx),
            ),
        );
        add(
            "rc8_closure_stability_e",
            "Definition 1.11 (8) E",
            forall(&[x, y, z], p.fold(&[&closure_xyz, x])?.equals(&xyzx)),
        );

        let xyx = p.fold(&[x, y, x])?;
        let xyxx = p.fold(&[x, y, x, x])?;
        let closure_xyx = p.fold(&[&xyx, &pp(x, y)])?;
        add(
            "rc9_weak_closure_stability",
            "Definition 1.11 (9) <=",
            forall(&[x, y], p.fold(&[&closure_xyx, x, &xyxx])?.equals(&xyxx)),
        );
        add(
            "rc9_weak_closure_stability_e",
            "Definition 1.11 (9) E",
            forall(&[x, y], p.fold(&[&closure_xyx, x])?.equals(&xyxx)),
        );

        // Companions of the relative closure axioms
        add(
            "quasi_antisym_p",
            "Quasi-identity: anti-symmetry of p",
            forall(
                &[x, y],
                (pp(x, y).equals(y) & pp(y, x).equals(x)) >> x.equals(y),
            ),
        );
        add(
            "k_p",
            "y <= xy for p",
            forall(&[x, y], p.fold(&[y, &pp(x, y)])?.equals(&pp(x, y))),
        );
        add(
            "cornish_j_p",
            "Cornish J for p",
            forall(&[x, y], p.fold(&[x, y, x])?.equals(&p.fold(&[y, x, y])?)),
        );

        // Not part of any built-in theory: p and t stay distinct unless this
        // is assumed explicitly
        add(
            "link_p_equals_tf",
            "Optional link p = t",
            forall(&[x, y], pp(x, y).equals(&f.t(x, y))),
        );

        Ok(Catalog { axioms })
    }

    pub fn get(&self, name: &str) -> Result<&Axiom> {
        self.axioms
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| Error::UnknownAxiom(name.to_string()))
    }

    /// Looks up several axioms, preserving the requested order
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Axiom>> {
        names
            .iter()
            .map(|name| self.get(name.as_ref()).cloned())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axiom> {
        self.axioms.iter()
    }

    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }
}
