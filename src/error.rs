// src/error.rs
/*!
Typed failures of the estimator.

Routine walk outcomes (a step leaving the lattice, a candidate landing outside the
sphere, a zero hit ratio) are **not** errors: they are recovered where they happen.
Only configuration problems and the optional retry caps surface here.
*/

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("no in-sphere lattice point after {attempts} sampling attempts")]
    SamplingExhausted { attempts: u64 },

    #[error("zero hit ratio for cubes {inner_edge:.3} -> {outer_edge:.3} after {reruns} re-runs")]
    DegenerateRatio { inner_edge: f64, outer_edge: f64, reruns: u64 },

    #[error("config io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WalkError>;
