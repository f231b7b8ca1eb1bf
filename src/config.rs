// src/config.rs
/*!
Run configuration: one immutable value built at startup and passed by reference
into every estimator function.

Defaults are the standard batch run: `d = 20`, cube spacing `0.1`, unit
sphere, smallest cube edge `0.1`, 20 trials of 10 000-step walks.

# Retry caps
Sphere sampling and zero-ratio re-runs are **unbounded** when their caps are `None`
(the default). A run with an unlucky geometry may then never terminate. Setting a cap
turns exhaustion into a [`WalkError`].
*/

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WalkError};

// ======================================================================================
// ------------------------------------ WalkConfig --------------------------------------
// ======================================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    pub dimension: usize,           // D
    pub spacing: f64,               // cube-edge step; lattice step is spacing / 10
    pub radius: f64,                // sphere radius (compared literally, see geometry)
    pub edge_min: f64,              // smallest cube, assumed inside the sphere
    pub tests: usize,               // independent trials
    pub cycles: usize,              // walk length per ratio
    pub seed: Option<u64>,
    pub max_sample_attempts: Option<u64>,
    pub max_ratio_reruns: Option<u64>,
    pub parallel: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            dimension: 20,
            spacing: 0.1,
            radius: 1.0,
            edge_min: 0.1,
            tests: 20,
            cycles: 10_000,
            seed: None,
            max_sample_attempts: None,
            max_ratio_reruns: None,
            parallel: false,
        }
    }
}

impl WalkConfig {
    /// Read a (possibly partial) JSON config; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let cfg: Self = serde_json::from_str(&raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> WalkError {
            WalkError::InvalidConfig { field, reason: reason.into() }
        }

        if self.dimension == 0 {
            return Err(invalid("dimension", "must be >= 1"));
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(invalid(
                "spacing",
                format!("must be finite and > 0, got {}", self.spacing),
            ));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(invalid(
                "radius",
                format!("must be finite and > 0, got {}", self.radius),
            ));
        }
        if !(self.edge_min.is_finite() && self.edge_min > 0.0) {
            return Err(invalid(
                "edge_min",
                format!("must be finite and > 0, got {}", self.edge_min),
            ));
        }
        if self.tests == 0 {
            return Err(invalid("tests", "must be >= 1"));
        }
        if self.cycles == 0 {
            return Err(invalid("cycles", "must be >= 1"));
        }
        if self.max_sample_attempts == Some(0) {
            return Err(invalid("max_sample_attempts", "must be >= 1 when set"));
        }
        if self.max_ratio_reruns == Some(0) {
            return Err(invalid("max_ratio_reruns", "must be >= 1 when set"));
        }
        Ok(())
    }
}
