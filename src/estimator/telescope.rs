// src/estimator/telescope.rs
/*!
Volume telescoping: from the exact volume of a cube inside the sphere up to the
sphere itself.

With cube edges `e_0 < e_1 < … < e_m`, `C_0 ⊂ S` and `S ⊂ C_m`:

```text
vol(S) = vol(C_0) / Π_i  vol(C_{i-1} ∩ S) / vol(C_i ∩ S)
```

Each factor is one [`estimate_ratio`] walk. A zero ratio cannot be divided by, so the
whole walk for that factor is re-run with fresh randomness until it is non-zero.
Without `max_ratio_reruns` that re-run loop has **no cap**.

# Trials & seeding
[`run_trials`] repeats the telescope `cfg.tests` times. Trial `i` draws from its own
`ChaCha8Rng` seeded with `seed + i` (wrapping), so a seeded run yields the same
per-trial numbers whether trials run one after another or on the rayon pool.
*/

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, trace, warn};

use super::ratio::estimate_ratio;
use crate::config::WalkConfig;
use crate::error::{Result, WalkError};
use crate::geometry::{cube_volume, in_sphere, sphere_volume};
use crate::report::{Report, Summary, TrialResult};
use crate::space::lattice::{arange, ChoiceAxis};

// ======================================================================================
// ---------------------------------- Cube sequence -------------------------------------
// ======================================================================================

/// Whether the corner `(edge/2, …, edge/2)` of the cube lies inside the sphere.
#[inline]
fn corner_in_sphere(edge: f64, cfg: &WalkConfig) -> bool {
    in_sphere(&vec![edge / 2.0; cfg.dimension], cfg.radius)
}

/**
Increasing cube edges `edge_min, edge_min + spacing, …` up to twice the first
`edge_max` whose corner leaves the sphere.

- The search for `edge_max` starts at `edge_min + spacing`.
- Doubling gives the outermost walks room: their cube comfortably contains the sphere.
- The last value is included up to a half-spacing tolerance.

Logs a warning if the `edge_min` cube is not inside the sphere, since the telescope
then starts from a volume that is not fully inside `S`.
*/
pub fn cube_edges(cfg: &WalkConfig) -> Vec<f64> {
    if !corner_in_sphere(cfg.edge_min, cfg) {
        warn!(
            edge_min = cfg.edge_min,
            dimension = cfg.dimension,
            "smallest cube is not contained in the sphere"
        );
    }

    let mut edge_max = cfg.edge_min + cfg.spacing;
    while corner_in_sphere(edge_max, cfg) {
        edge_max += cfg.spacing;
    }
    edge_max *= 2.0;

    arange(cfg.edge_min, edge_max + cfg.spacing / 2.0, cfg.spacing)
}

// ======================================================================================
// ---------------------------------- One telescope -------------------------------------
// ======================================================================================

/// One factor of the telescope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioStep {
    pub inner_edge: f64,
    pub outer_edge: f64,
    pub ratio: f64,
    /// Walks discarded because they scored zero hits.
    pub reruns: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeEstimate {
    pub volume: f64,
    pub steps: Vec<RatioStep>,
}

/// Walk until the ratio for `inner_edge` inside `axis` is non-zero.
pub fn nonzero_ratio<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: &WalkConfig,
    axis: &ChoiceAxis,
    inner_edge: f64,
) -> Result<RatioStep> {
    let mut reruns: u64 = 0;
    let mut ratio = estimate_ratio(rng, cfg, axis, inner_edge)?;

    while ratio == 0.0 {
        if cfg.max_ratio_reruns.is_some_and(|cap| reruns >= cap) {
            return Err(WalkError::DegenerateRatio {
                inner_edge,
                outer_edge: axis.edge(),
                reruns,
            });
        }
        reruns += 1;
        trace!(
            inner_edge,
            outer_edge = axis.edge(),
            reruns,
            "zero hit ratio, re-running walk"
        );
        ratio = estimate_ratio(rng, cfg, axis, inner_edge)?;
    }

    Ok(RatioStep { inner_edge, outer_edge: axis.edge(), ratio, reruns })
}

/// Telescope once across `edges` (see [`cube_edges`]).
pub fn estimate_volume<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: &WalkConfig,
    edges: &[f64],
) -> Result<VolumeEstimate> {
    let Some(&edge_min) = edges.first() else {
        return Err(WalkError::InvalidConfig {
            field: "edge_min",
            reason: "empty cube-edge sequence".into(),
        });
    };

    let mut volume = cube_volume(edge_min, cfg.dimension);
    let mut steps = Vec::with_capacity(edges.len().saturating_sub(1));

    for pair in edges.windows(2) {
        let (inner_edge, outer_edge) = (pair[0], pair[1]);
        let axis = ChoiceAxis::new(outer_edge, cfg.spacing);

        let ratio_step = nonzero_ratio(rng, cfg, &axis, inner_edge)?;
        volume /= ratio_step.ratio;

        debug!(
            inner_edge,
            outer_edge,
            ratio = ratio_step.ratio,
            reruns = ratio_step.reruns,
            volume,
            "telescope step"
        );
        steps.push(ratio_step);
    }

    Ok(VolumeEstimate { volume, steps })
}

// ======================================================================================
// ------------------------------------- Trials -----------------------------------------
// ======================================================================================

/// Run `cfg.tests` independent telescopes and summarize them.
pub fn run_trials(cfg: &WalkConfig) -> Result<Report> {
    cfg.validate()?;

    let edges = cube_edges(cfg);
    let exact = sphere_volume(cfg.dimension);
    let seed = cfg.seed.unwrap_or_else(|| rand::rng().random());

    info!(
        dimension = cfg.dimension,
        tests = cfg.tests,
        cycles = cfg.cycles,
        cubes = edges.len(),
        seed,
        parallel = cfg.parallel,
        "starting trials"
    );

    let trial = |i: usize| -> Result<TrialResult> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(i as u64));
        let est = estimate_volume(&mut rng, cfg, &edges)?;
        let result = TrialResult::new(i, est.volume, exact, est.steps);
        info!(
            trial = i,
            volume = result.volume,
            percentage_error = result.percentage_error,
            "trial finished"
        );
        Ok(result)
    };

    let trials: Vec<TrialResult> = if cfg.parallel {
        (0..cfg.tests).into_par_iter().map(trial).collect::<Result<Vec<_>>>()?
    } else {
        (0..cfg.tests).map(trial).collect::<Result<Vec<_>>>()?
    };

    let summary = Summary::from_trials(cfg.dimension, exact, &trials).ok_or_else(|| {
        WalkError::InvalidConfig {
            field: "tests",
            reason: "no trials ran".into(),
        }
    })?;

    Ok(Report { seed, edges, trials, summary })
}
