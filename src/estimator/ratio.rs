// src/estimator/ratio.rs
/*!
Hit-ratio estimation for one pair of nested cubes.

For inner cube `C_in ⊂ C_out`, a random walk over the lattice of `C_out ∩ S` counts
how many visited positions also fall in `C_in ∩ S`. The fraction estimates
`vol(C_in ∩ S) / vol(C_out ∩ S)`.

# Walk rules
1. Start at a uniformly sampled in-sphere lattice point of `C_out`.
2. Each of the `cycles` iterations first scores the current position, then proposes
   a step.
3. A proposal that leaves the lattice or the sphere is redrawn from the **same**
   position. Each redraw advances a retry cursor that starts at the current iteration
   index; the iteration counter itself is not advanced.
4. When the cursor reaches `cycles` the walk stops early.
5. The ratio is always `hits / cycles`, even after an early stop.

A ratio of exactly `0.0` is valid output. Re-running on zero is the caller's job (see
[`super::telescope`]); this function keeps no state between calls.
*/

use rand::Rng;

use crate::config::WalkConfig;
use crate::error::Result;
use crate::geometry::in_both;
use crate::space::lattice::{sample_in_sphere, ChoiceAxis};
use crate::space::walk::step;

/// Bookkeeping for one walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatioWalk {
    pub cycles: usize,
    /// Positions scored inside `C_in ∩ S`.
    pub hits: usize,
    /// Accepted moves.
    pub moves: usize,
    /// Proposals redrawn (off-lattice or off-sphere).
    pub rejected: usize,
    /// Whether the retry cursor exhausted the budget.
    pub stopped_early: bool,
}

impl RatioWalk {
    /// `hits / cycles` over the full budget.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.hits as f64 / self.cycles as f64
    }
}

/// Estimate `vol(C_in ∩ S) / vol(C_out ∩ S)` where `C_out` is the cube spanned by
/// `axis` and `C_in` has side `inner_edge`.
#[inline]
pub fn estimate_ratio<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: &WalkConfig,
    axis: &ChoiceAxis,
    inner_edge: f64,
) -> Result<f64> {
    walk_ratio(rng, cfg, axis, inner_edge).map(|w| w.ratio())
}

/// Same walk as [`estimate_ratio`], keeping the counters.
pub fn walk_ratio<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: &WalkConfig,
    axis: &ChoiceAxis,
    inner_edge: f64,
) -> Result<RatioWalk> {
    let cycles = cfg.cycles;
    let radius = cfg.radius;

    let (mut index, mut coord) =
        sample_in_sphere(rng, cfg.dimension, axis, radius, cfg.max_sample_attempts)?;

    let mut walk = RatioWalk { cycles, hits: 0, moves: 0, rejected: 0, stopped_early: false };

    for i in 0..cycles {
        if in_both(&coord, radius, inner_edge) {
            walk.hits += 1;
        }

        let mut cursor = i;
        let mut proposal = step(rng, axis, &index).accepted(radius);
        while proposal.is_none() && cursor < cycles {
            cursor += 1;
            walk.rejected += 1;
            proposal = step(rng, axis, &index).accepted(radius);
        }

        if cursor == cycles {
            walk.stopped_early = true;
            break;
        }

        // cursor < cycles, so the loop above exited on an accepted proposal
        if let Some((next_index, next_coord)) = proposal {
            index = next_index;
            coord = next_coord;
            walk.moves += 1;
        }
    }

    Ok(walk)
}
