// src/space/walk.rs
/*!
Lazy nearest-neighbour moves on the choice-axis lattice.

Every component of the current [`LatticeIndex`] is shifted independently by a uniform
draw from `{-1, 0, +1}`, so a single step reaches any of the `3^D` neighbours
(including staying put). The walker carries no state besides its position.

A step that pushes any component off the axis is an ordinary outcome near the cube
faces, reported as [`WalkStep::OutOfLattice`]. Callers treat it as "no move".
*/

use rand::Rng;

use super::lattice::{ChoiceAxis, Coordinate, LatticeIndex};
use crate::geometry::in_sphere;

#[derive(Debug, Clone, PartialEq)]
pub enum WalkStep {
    /// Proposed index is on the lattice.
    Moved { index: LatticeIndex, coord: Coordinate },
    /// At least one component left `[0, axis.len())`.
    OutOfLattice { index: LatticeIndex },
}

impl WalkStep {
    /// The new position if the step stayed on the lattice **and** inside the sphere.
    #[inline]
    pub fn accepted(self, radius: f64) -> Option<(LatticeIndex, Coordinate)> {
        match self {
            WalkStep::Moved { index, coord } if in_sphere(&coord, radius) => Some((index, coord)),
            _ => None,
        }
    }
}

/// Propose one move from `current`.
pub fn step<R: Rng + ?Sized>(rng: &mut R, axis: &ChoiceAxis, current: &[isize]) -> WalkStep {
    let index: LatticeIndex = current
        .iter()
        .map(|&i| i + rng.random_range(-1i32..=1) as isize)
        .collect();
    perturbed(axis, index)
}

/// Resolve an already-perturbed index against the axis.
#[inline]
pub fn perturbed(axis: &ChoiceAxis, index: LatticeIndex) -> WalkStep {
    match axis.lookup(&index) {
        Some(coord) => WalkStep::Moved { index, coord },
        None => WalkStep::OutOfLattice { index },
    }
}
