// SPDX-FileCopyrightText: 2025 hoopcheck contributors
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Named axiom groupings
//!
//! A theory is an ordered list of catalog entries. Nothing is validated:
//! duplicates or mutually inconsistent axioms are the caller's business.

use serde::{Deserialize, Serialize};

use crate::catalog::{Axiom, Catalog};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Theory {
    pub name: String,
    pub description: String,
    pub axioms: Vec<Axiom>,
}

impl Theory {
    pub fn new(name: &str, description: &str, axioms: Vec<Axiom>) -> Self {
        Theory {
            name: name.to_string(),
            description: description.to_string(),
            axioms,
        }
    }

    /// Builds a theory from catalog names
    pub fn from_catalog(
        catalog: &Catalog,
        name: &str,
        description: &str,
        axioms: &[&str],
    ) -> Result<Self> {
        Ok(Self::new(name, description, catalog.select(axioms)?))
    }

    /// Appends the axioms of `other` after this theory's own
    pub fn concat(&self, name: &str, description: &str, other: &[Axiom]) -> Theory {
        let mut axioms = self.axioms.clone();
        axioms.extend_from_slice(other);
        Theory::new(name, description, axioms)
    }

    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }
}

/// Built-in theories, in definition order
#[derive(Debug, Clone)]
pub struct TheoryRegistry {
    theories: Vec<Theory>,
}

impl TheoryRegistry {
    pub fn build(catalog: &Catalog) -> Result<Self> {
        let wrc_p = Theory::from_catalog(
            catalog,
            "wrc_p",
            "Weak relative closure, Definition 1.11: (5)<=, (7)E, (9)<=",
            &[
                "rc5_right_absorption",
                "rc7_flattening",
                "rc9_weak_closure_stability",
            ],
        )?;

        let rc_p = Theory::from_catalog(
            catalog,
            "rc_p",
            "Relative closure, Definition 1.11: (4)E, (5)<=, (6)<=, (7)E, (8)<=",
            &[
                "rc4_left_absorption_e",
                "rc5_right_absorption",
                "rc6_left_monotonicity",
                "rc7_flattening",
                "rc8_closure_stability",
            ],
        )?;

        let mbc = Theory::from_catalog(
            catalog,
            "mbc",
            "MBC-algebras: reflexivity, unit reduction, M, B, C and anti-symmetry",
            &[
                "a5_refl",
                "a6_unit_red",
                "a21_m",
                "a17_b",
                "a16_c",
                "quasi_antisym_f",
            ],
        )?;

        let johnstone_j = Theory::from_catalog(
            catalog,
            "johnstone_j",
            "Johnstone algebras: reflexivity, unit reduction, monoidal division",
            &["a5_refl", "a6_unit_red", "a19_mono_div"],
        )?;

        let hoops = Theory::from_catalog(
            catalog,
            "hoops",
            "Hoops: commutative monoid with residuated implication",
            &[
                "a1_assoc",
                "a2_right_id",
                "a3_left_id",
                "a4_comm",
                "a5_refl",
                "a6_unit_red",
                "a7_hoop_sym",
                "a8_resid",
            ],
        )?;

        let heyting = hoops.concat(
            "heyting_semilattices",
            "Heyting semilattices: hoops with idempotent multiplication",
            &catalog.select(&["a9_idemp"])?,
        );

        Ok(TheoryRegistry {
            theories: vec![wrc_p, rc_p, mbc, johnstone_j, hoops, heyting],
        })
    }

    pub fn get(&self, name: &str) -> Result<&Theory> {
        self.theories
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| Error::UnknownTheory(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theory> {
        self.theories.iter()
    }
}
