//! Minimal group interface and an axiom checker.
//!
//! There is no proof engine behind these groups, so the laws are checked on
//! sampled elements instead. Both [`QuaternionGroup`](crate::QuaternionGroup)
//! and [`DihedralGroup`](crate::dihedral::DihedralGroup) implement [`Group`].

use std::fmt;

/// A group given by its identity, multiplication and inverse.
pub trait Group {
    type Element: Clone + PartialEq + fmt::Debug;

    fn identity(&self) -> Self::Element;

    fn multiply(&self, x: &Self::Element, y: &Self::Element) -> Self::Element;

    fn inverse(&self, x: &Self::Element) -> Self::Element;
}

/// Which group law failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axiom {
    Associativity,
    LeftIdentity,
    RightIdentity,
    LeftInverse,
    RightInverse,
}

/// A counterexample to one of the group laws.
#[derive(Debug, Clone, PartialEq)]
pub struct AxiomViolation<E> {
    pub axiom: Axiom,
    pub elements: Vec<E>,
}

/// Checks the group laws on every triple drawn from `samples`.
///
/// Cost is cubic in `samples.len()`.
pub fn check_axioms<G: Group>(
    group: &G,
    samples: &[G::Element],
) -> Result<(), AxiomViolation<G::Element>> {
    let e = group.identity();

    for x in samples {
        let violation = |axiom| AxiomViolation {
            axiom,
            elements: vec![x.clone()],
        };
        if group.multiply(&e, x) != *x {
            return Err(violation(Axiom::LeftIdentity));
        }
        if group.multiply(x, &e) != *x {
            return Err(violation(Axiom::RightIdentity));
        }
        let inv = group.inverse(x);
        if group.multiply(&inv, x) != e {
            return Err(violation(Axiom::LeftInverse));
        }
        if group.multiply(x, &inv) != e {
            return Err(violation(Axiom::RightInverse));
        }
    }

    for x in samples {
        for y in samples {
            let xy = group.multiply(x, y);
            for z in samples {
                let left = group.multiply(&xy, z);
                let right = group.multiply(x, &group.multiply(y, z));
                if left != right {
                    return Err(AxiomViolation {
                        axiom: Axiom::Associativity,
                        elements: vec![x.clone(), y.clone(), z.clone()],
                    });
                }
            }
        }
    }

    Ok(())
}
