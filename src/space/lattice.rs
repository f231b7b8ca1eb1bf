// src/space/lattice.rs
/*!
The **choice axis**: one shared, discretized axis from which every coordinate
component of a `D`-dimensional lattice point is looked up.

- A lattice point is a [`LatticeIndex`] (`D` signed integers). Its coordinate is
  obtained component-wise: `coord[k] = axis[index[k]]`.
- Indices are `isize` so a walker can step to `-1`; such an index is simply **not on
  the lattice** and [`ChoiceAxis::lookup`] returns `None` rather than wrapping or
  clamping.
- The axis spans `[-edge/2, edge/2]` with step `spacing / 10`. It is rebuilt per cube
  size and borrowed read-only for the whole ratio estimate.

# Sampling contract
[`sample_in_sphere`] is a rejection loop. With `max_attempts == None` it has **no
iteration cap**: if the sphere occupies a vanishing fraction of the cube lattice it
may not return in any practical time. Pass a cap to turn that into
[`WalkError::SamplingExhausted`].
*/

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::error::{Result, WalkError};
use crate::geometry::in_sphere;

/// Position on the lattice: one axis index per dimension.
pub type LatticeIndex = Vec<isize>;

/// Position in space: one real per dimension.
pub type Coordinate = Vec<f64>;

// ======================================================================================
// ------------------------------------ ChoiceAxis --------------------------------------
// ======================================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceAxis {
    edge: f64,
    values: Vec<f64>,
}

impl ChoiceAxis {
    /// Axis for the cube of side `edge`, lattice step `spacing / 10`.
    #[inline]
    pub fn new(edge: f64, spacing: f64) -> Self {
        Self { edge, values: build_axis(edge, spacing) }
    }

    #[inline] pub fn edge(&self) -> f64 { self.edge }
    #[inline] pub fn len(&self) -> usize { self.values.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Single-component lookup; `None` if `i` is off the axis.
    #[inline(always)]
    pub fn get(&self, i: isize) -> Option<f64> {
        usize::try_from(i).ok().and_then(|u| self.values.get(u).copied())
    }

    /// Map a whole lattice index to its coordinate.
    /// `None` as soon as any component lies outside `[0, len)`.
    pub fn lookup(&self, index: &[isize]) -> Option<Coordinate> {
        index.iter().map(|&i| self.get(i)).collect()
    }
}

/**
Axis values `-edge/2, -edge/2 + s, …` with `s = spacing / 10`, stopping strictly
below `edge/2 + spacing/20`.

The count is `ceil((stop - start) / s)` and each value is computed as
`start + i * s` (not by repeated addition), so rounding never accumulates. The
half-step of slack on the upper bound makes `+edge/2` land on the axis even when
floating-point stepping falls a hair short of it.
*/
#[inline]
pub fn build_axis(edge: f64, spacing: f64) -> Vec<f64> {
    arange(-edge / 2.0, edge / 2.0 + spacing / 20.0, spacing / 10.0)
}

/// Half-open range `[start, stop)` at `step`: `ceil((stop - start) / step)` values
/// `start + i * step`. Empty if the count is not a positive finite number.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step).ceil();
    if !(n.is_finite() && n > 0.0) {
        return Vec::new();
    }
    (0..n as usize).map(|i| start + i as f64 * step).collect()
}

// ======================================================================================
// ---------------------------------- Sphere sampling -----------------------------------
// ======================================================================================

/// Draw a uniformly random lattice point whose coordinate lies inside the sphere.
///
/// Each index component is independently uniform over `[0, axis.len())`; candidates
/// outside the sphere are rejected and redrawn. Cube membership needs no check since
/// every axis value already lies in the cube.
pub fn sample_in_sphere<R: Rng + ?Sized>(
    rng: &mut R,
    dimension: usize,
    axis: &ChoiceAxis,
    radius: f64,
    max_attempts: Option<u64>,
) -> Result<(LatticeIndex, Coordinate)> {
    let dist = Uniform::new(0usize, axis.len()).map_err(|e| WalkError::InvalidConfig {
        field: "spacing",
        reason: format!("empty choice axis for edge {}: {e}", axis.edge()),
    })?;

    let mut attempts: u64 = 0;
    loop {
        if max_attempts.is_some_and(|cap| attempts >= cap) {
            return Err(WalkError::SamplingExhausted { attempts });
        }
        attempts += 1;

        let draws: Vec<usize> = (0..dimension).map(|_| dist.sample(rng)).collect();
        let coord: Coordinate = draws.iter().map(|&i| axis.values[i]).collect();

        if in_sphere(&coord, radius) {
            let index: LatticeIndex = draws.into_iter().map(|i| i as isize).collect();
            return Ok((index, coord));
        }
    }
}
