use std::fmt;

use crate::{
    ast::Expr,
    frame::Snapshot,
};

/// Errors that can occur while evaluating a selection against a snapshot.
///
/// An evaluation error only aborts the current call; the selection can still
/// be evaluated against other snapshots.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The selection reads a property that no atom of the snapshot provides
    /// (velocities, masses, residues, ...). `index` is the first atom checked.
    MissingData {
        property: &'static str,
        index: usize,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::MissingData { property, index } => {
                write!(f, "Missing data: no {} available for atom {}", property, index)
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluates compiled selections against one snapshot.
///
/// Every node produces a full per-atom mask, so the work done by one
/// evaluation is bounded by the number of atoms times the number of nodes.
pub struct Evaluator<'a, S: Snapshot + ?Sized> {
    snapshot: &'a S,
}

impl<'a, S: Snapshot + ?Sized> Evaluator<'a, S> {
    pub fn new(snapshot: &'a S) -> Self {
        Evaluator { snapshot }
    }

    /// Ascending indices of the atoms matching `expr`.
    pub fn eval(&self, expr: &Expr) -> Result<Vec<usize>, EvalError> {
        let mask = self.eval_mask(expr)?;
        Ok(mask_to_indices(&mask))
    }

    /// One verdict per atom, in snapshot order.
    pub fn eval_mask(&self, expr: &Expr) -> Result<Vec<bool>, EvalError> {
        let snapshot = self.snapshot;
        match expr {
            Expr::All => Ok(vec![true; snapshot.size()]),
            Expr::None => Ok(vec![false; snapshot.size()]),
            Expr::Name { name, equals } => {
                Ok(self.mask_by(|i| (snapshot.name(i) == name) == *equals))
            }
            Expr::Type { name, equals } => self.mask_optional(
                "atom type",
                move |i| snapshot.atom_type(i),
                |atom_type| (atom_type == name) == *equals,
            ),
            Expr::Resname { name, equals } => self.mask_optional(
                "residue",
                move |i| snapshot.residue_name(i),
                |resname| (resname == name) == *equals,
            ),
            Expr::Index { op, value } => Ok(self.mask_by(|i| op.compare(i as u64, *value))),
            Expr::Resid { op, value } => self.mask_optional(
                "residue",
                move |i| snapshot.residue_id(i),
                |resid| op.compare(resid, *value),
            ),
            Expr::Mass { op, value } => self.mask_optional(
                "mass",
                move |i| snapshot.mass(i),
                |mass| op.compare(mass, *value),
            ),
            Expr::Position { axis, op, value } => Ok(self.mask_by(|i| {
                op.compare(snapshot.position(i)[axis.index()], *value)
            })),
            Expr::Velocity { axis, op, value } => self.mask_optional(
                "velocity",
                move |i| snapshot.velocity(i),
                |velocity| op.compare(velocity[axis.index()], *value),
            ),
            Expr::And { lhs, rhs } => self.combine(lhs, rhs, |a, b| a && b),
            Expr::Or { lhs, rhs } => self.combine(lhs, rhs, |a, b| a || b),
            Expr::Not { operand } => {
                let mut mask = self.eval_mask(operand)?;
                for verdict in &mut mask {
                    *verdict = !*verdict;
                }
                Ok(mask)
            }
        }
    }

    fn mask_by<F>(&self, predicate: F) -> Vec<bool>
    where
        F: Fn(usize) -> bool,
    {
        (0..self.snapshot.size()).map(predicate).collect()
    }

    /// Mask over a property the snapshot may not carry. An atom without a
    /// value never matches; a non-empty snapshot where no atom has one fails.
    fn mask_optional<T, G, P>(
        &self,
        property: &'static str,
        get: G,
        predicate: P,
    ) -> Result<Vec<bool>, EvalError>
    where
        G: Fn(usize) -> Option<T>,
        P: Fn(T) -> bool,
    {
        let mut available = false;
        let mask: Vec<bool> = (0..self.snapshot.size())
            .map(|i| match get(i) {
                Some(value) => {
                    available = true;
                    predicate(value)
                }
                None => false,
            })
            .collect();

        if !available && !mask.is_empty() {
            return Err(EvalError::MissingData { property, index: 0 });
        }
        Ok(mask)
    }

    fn combine(
        &self,
        lhs: &Expr,
        rhs: &Expr,
        op: fn(bool, bool) -> bool,
    ) -> Result<Vec<bool>, EvalError> {
        let mut mask = self.eval_mask(lhs)?;
        let other = self.eval_mask(rhs)?;
        for (verdict, other) in mask.iter_mut().zip(other) {
            *verdict = op(*verdict, other);
        }
        Ok(mask)
    }
}

/// Positions of the `true` entries, ascending.
pub fn mask_to_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &matched)| matched.then_some(i))
        .collect()
}

