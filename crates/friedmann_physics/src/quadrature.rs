use friedmann_core::{
    CosmologyError, DEFAULT_INTEGRATION_STEPS, DEFAULT_START_SCALE, IntegrationConfig, KM_PER_MPC,
    Result, SECONDS_PER_GYR,
};
use tracing::debug;

use crate::model::CosmologicalModel;

/// Scale-factor samples used to integrate the Friedmann equation
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleGrid {
    /// `steps` log-spaced points from `start` up to the target scale
    LogSpaced { start: f64, steps: usize },
    /// Caller-supplied strictly increasing samples. Points at or beyond
    /// the target are dropped and the target closes the grid.
    Explicit(Vec<f64>),
}

impl Default for ScaleGrid {
    fn default() -> Self {
        Self::LogSpaced {
            start: DEFAULT_START_SCALE,
            steps: DEFAULT_INTEGRATION_STEPS,
        }
    }
}

impl From<IntegrationConfig> for ScaleGrid {
    fn from(config: IntegrationConfig) -> Self {
        Self::LogSpaced {
            start: config.start_scale,
            steps: config.steps,
        }
    }
}

impl ScaleGrid {
    pub fn log_spaced(start: f64, steps: usize) -> Self {
        Self::LogSpaced { start, steps }
    }

    /// Materialise the grid for integration up to `target`
    pub fn points(&self, target: f64) -> Result<Vec<f64>> {
        match self {
            Self::LogSpaced { start, steps } => {
                if !start.is_finite() || *start <= 0.0 {
                    return Err(CosmologyError::InvalidGrid(format!(
                        "start scale must be positive, got {start}"
                    )));
                }
                if *steps < 2 {
                    return Err(CosmologyError::InvalidGrid(format!(
                        "need at least 2 steps, got {steps}"
                    )));
                }
                if *start >= target {
                    return Err(CosmologyError::InvalidGrid(format!(
                        "start scale {start} must lie below target {target}"
                    )));
                }
                Ok(logspace(*start, target, *steps))
            }
            Self::Explicit(samples) => {
                let mut previous = 0.0;
                for &a in samples {
                    if !a.is_finite() || a <= previous {
                        return Err(CosmologyError::InvalidGrid(format!(
                            "samples must be positive and strictly increasing, got {a} after {previous}"
                        )));
                    }
                    previous = a;
                }
                let mut points: Vec<f64> = samples.iter().copied().filter(|&a| a < target).collect();
                points.push(target);
                Ok(points)
            }
        }
    }
}

/// `n` points spaced evenly in log between `start` and `end` inclusive
pub fn logspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let log_start = start.ln();
            let step = (end.ln() - log_start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| (log_start + step * i as f64).exp()).collect();
            // Pin the endpoints against exp/ln rounding
            points[0] = start;
            points[n - 1] = end;
            points
        }
    }
}

/// Rectangle-rule sum of da / sqrt(F(a)) over the grid.
///
/// Each point contributes (a_i - a_{i-1}) / sqrt(F(a_i)), with the step's
/// left edge taken from the previous grid point (0 before the first one).
/// This is not a trapezoid rule; it carries an O(step) bias that shrinks
/// as the grid is refined.
pub fn integrate_hubble_time(model: &CosmologicalModel, points: &[f64]) -> Result<f64> {
    let mut previous = 0.0;
    let mut total = 0.0;
    for &a in points {
        let term = model.friedmann_term(a);
        if term.is_nan() || term <= 0.0 {
            return Err(CosmologyError::NoRealExpansion(a));
        }
        total += (a - previous) / term.sqrt();
        previous = a;
    }
    Ok(total)
}

impl CosmologicalModel {
    /// Cosmic time in Gyr elapsed between a -> 0 and `target_scale`,
    /// integrating the Friedmann equation over `grid`.
    pub fn cosmic_time(&self, target_scale: f64, grid: &ScaleGrid) -> Result<f64> {
        if !target_scale.is_finite() || target_scale <= 0.0 {
            return Err(CosmologyError::NonPositiveScale(target_scale));
        }
        let points = grid.points(target_scale)?;
        let hubble_time = integrate_hubble_time(self, &points)?;
        let seconds = hubble_time * KM_PER_MPC / self.hubble_constant();
        let gyr = seconds / SECONDS_PER_GYR;
        debug!(
            "cosmic_time(a={:.3e}) over {} points = {:.4} Gyr",
            target_scale,
            points.len(),
            gyr
        );
        Ok(gyr)
    }

    /// Cosmic time in Gyr at `scale` on the default grid
    pub fn age_at_scale(&self, scale: f64) -> Result<f64> {
        self.cosmic_time(scale, &ScaleGrid::default())
    }

    /// Age of the universe today (a = 1) in Gyr
    pub fn age(&self) -> Result<f64> {
        self.age_at_scale(1.0)
    }
}
