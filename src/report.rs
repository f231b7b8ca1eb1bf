// src/report.rs
/*!
Trial results and the run summary, printable as the classic text report or
serializable as JSON.

Text layout:

```text
Test 0: volume = 0.026, percentage error = 1.23%
...
------Test Summary------
Dimension = 20
Volume of sphere is estimated as 0.026
Exact volume is 0.026
Percentage of error = 0.41%
```
*/

use std::fmt;

use serde::Serialize;

use crate::estimator::telescope::RatioStep;

/// `|volume - exact| / exact * 100`.
#[inline]
pub fn percentage_error(volume: f64, exact: f64) -> f64 {
    (volume - exact).abs() / exact * 100.0
}

// ======================================================================================
// ----------------------------------- TrialResult --------------------------------------
// ======================================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialResult {
    pub index: usize,
    pub volume: f64,
    pub percentage_error: f64,
    pub steps: Vec<RatioStep>,
}

impl TrialResult {
    pub fn new(index: usize, volume: f64, exact: f64, steps: Vec<RatioStep>) -> Self {
        Self { index, volume, percentage_error: percentage_error(volume, exact), steps }
    }
}

impl fmt::Display for TrialResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Test {}: volume = {:.3}, percentage error = {:.2}%",
            self.index, self.volume, self.percentage_error
        )
    }
}

// ======================================================================================
// ------------------------------------- Summary ----------------------------------------
// ======================================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub dimension: usize,
    pub exact_volume: f64,
    /// Trial with the smallest percentage error (earliest on ties).
    pub best_trial: usize,
    pub best_volume: f64,
    pub best_percentage_error: f64,
    pub mean_volume: f64,
    /// Sample standard deviation; `0` for a single trial.
    pub std_volume: f64,
}

impl Summary {
    /// `None` if `trials` is empty.
    pub fn from_trials(
        dimension: usize,
        exact_volume: f64,
        trials: &[TrialResult],
    ) -> Option<Self> {
        let first = trials.first()?;
        let best = trials.iter().fold(first, |best, t| {
            if t.percentage_error < best.percentage_error { t } else { best }
        });

        let n = trials.len() as f64;
        let mean_volume = trials.iter().map(|t| t.volume).sum::<f64>() / n;
        let std_volume = if trials.len() > 1 {
            let ss: f64 = trials.iter().map(|t| (t.volume - mean_volume).powi(2)).sum();
            (ss / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        Some(Self {
            dimension,
            exact_volume,
            best_trial: best.index,
            best_volume: best.volume,
            best_percentage_error: best.percentage_error,
            mean_volume,
            std_volume,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------Test Summary------")?;
        writeln!(f, "Dimension = {}", self.dimension)?;
        writeln!(f, "Volume of sphere is estimated as {:.3}", self.best_volume)?;
        writeln!(f, "Exact volume is {:.3}", self.exact_volume)?;
        write!(f, "Percentage of error = {:.2}%", self.best_percentage_error)
    }
}

// ======================================================================================
// -------------------------------------- Report ----------------------------------------
// ======================================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Base seed; trial `i` used `seed + i`.
    pub seed: u64,
    pub edges: Vec<f64>,
    pub trials: Vec<TrialResult>,
    pub summary: Summary,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.trials {
            writeln!(f, "{t}")?;
        }
        write!(f, "{}", self.summary)
    }
}
