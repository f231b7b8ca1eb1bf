/*!
Hypersphere volume estimation by **random-walk ratio telescoping**.

A chain of nested cubes `C_0 ⊂ … ⊂ C_m` straddles the sphere `S`. For each
neighbouring pair a lattice random walk constrained to `C_i ∩ S` estimates the hit
ratio `vol(C_{i-1} ∩ S) / vol(C_i ∩ S)`; dividing the exact `vol(C_0)` by all the
ratios telescopes up to `vol(S)`.

Layout:
- [`geometry`]: membership predicates, closed-form volumes.
- [`space::lattice`]: choice axis and in-sphere lattice sampling.
- [`space::walk`]: nearest-neighbour lattice moves.
- [`estimator::ratio`]: one hit-ratio walk.
- [`estimator::telescope`]: cube sequence, volume telescope, trials.
- [`report`]: per-trial lines and summary.
*/

pub mod config;
pub mod error;
pub mod geometry;
pub mod report;

pub mod space {
    pub mod lattice;
    pub mod walk;
}

pub mod estimator {
    pub mod ratio;
    pub mod telescope;
}

pub use config::WalkConfig;
pub use error::{Result, WalkError};
pub use estimator::ratio::estimate_ratio;
pub use estimator::telescope::{cube_edges, estimate_volume, run_trials};
pub use report::Report;
