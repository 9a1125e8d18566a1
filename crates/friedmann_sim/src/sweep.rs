//! Monte Carlo sweep over flat Lambda-CDM universes.
//! Each universe gets its own seeded stream, so results are reproducible
//! and independent of sweep size.

use std::ops::Range;

use friedmann_core::{CosmologyError, ModelConfig, Result, SimConfig};
use friedmann_physics::{CosmologicalModel, ScaleGrid};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Parameter ranges sampled by a sweep. Lambda is set to 1 - Omega_m - Omega_r.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRanges {
    pub matter_density: Range<f64>,
    pub radiation_density: Range<f64>,
    pub hubble_constant: Range<f64>,
}

impl Default for SweepRanges {
    fn default() -> Self {
        Self {
            matter_density: 0.2..0.4,
            radiation_density: 5e-5..1.5e-4,
            hubble_constant: 64.0..74.0,
        }
    }
}

/// Derived quantities for one sampled universe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    pub index: usize,
    pub seed: u64,
    pub model: ModelConfig,
    /// Age at a = 1, Gyr
    pub age_gyr: f64,
    /// Deceleration parameter today
    pub deceleration_today: f64,
    /// Scale factor where acceleration begins
    pub acceleration_onset: Option<f64>,
    /// Scale factor a(13.75 Gyr) from the epoch approximation
    pub scale_at_benchmark_age: f64,
}

pub fn universe_seed(base: u64, index: usize) -> u64 {
    base.wrapping_add(index as u64 * 7919)
}

fn sample_model(rng: &mut impl Rng, ranges: &SweepRanges) -> ModelConfig {
    let matter_density = rng.gen_range(ranges.matter_density.clone());
    let radiation_density = rng.gen_range(ranges.radiation_density.clone());
    ModelConfig {
        matter_density,
        lambda_density: 1.0 - matter_density - radiation_density,
        radiation_density,
        hubble_constant: rng.gen_range(ranges.hubble_constant.clone()),
    }
}

fn check_range(name: &str, range: &Range<f64>) -> Result<()> {
    if range.is_empty() || !range.start.is_finite() || !range.end.is_finite() {
        return Err(CosmologyError::InvalidConfig(format!(
            "{name} range {:?} is empty or unbounded",
            range
        )));
    }
    Ok(())
}

/// Sample `config.sweep_count` universes and measure each one
pub fn run_sweep(config: &SimConfig, ranges: &SweepRanges) -> Result<Vec<SweepResult>> {
    check_range("matter density", &ranges.matter_density)?;
    check_range("radiation density", &ranges.radiation_density)?;
    check_range("Hubble constant", &ranges.hubble_constant)?;
    if ranges.matter_density.end + ranges.radiation_density.end >= 1.0 {
        return Err(CosmologyError::InvalidConfig(
            "matter and radiation ranges leave no room for lambda".into(),
        ));
    }

    info!(
        "Sweeping {} universes (seed {})",
        config.sweep_count, config.seed
    );
    let grid = ScaleGrid::from(config.integration);
    let benchmark_age_s = friedmann_core::gyr_to_seconds(13.75);

    let mut results = Vec::with_capacity(config.sweep_count);
    for index in 0..config.sweep_count {
        let seed = universe_seed(config.seed, index);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let model_config = sample_model(&mut rng, ranges);
        let model = CosmologicalModel::from_config(&model_config)?;

        let acceleration_onset = model.acceleration_onset_scale()?;
        if acceleration_onset.is_none() {
            warn!("Universe #{} never accelerates", index + 1);
        }

        results.push(SweepResult {
            index,
            seed,
            model: model_config,
            age_gyr: model.cosmic_time(1.0, &grid)?,
            deceleration_today: model.deceleration_parameter(1.0)?,
            acceleration_onset,
            scale_at_benchmark_age: model.scale_at_time(benchmark_age_s)?,
        });
    }
    Ok(results)
}

/// Aggregate statistics over a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSummary {
    pub count: usize,
    pub min_age_gyr: f64,
    pub max_age_gyr: f64,
    pub mean_age_gyr: f64,
    pub accelerating_today: usize,
}

impl SweepSummary {
    pub fn from_results(results: &[SweepResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }
        let ages = results.iter().map(|r| r.age_gyr);
        Some(Self {
            count: results.len(),
            min_age_gyr: ages.clone().fold(f64::INFINITY, f64::min),
            max_age_gyr: ages.clone().fold(f64::NEG_INFINITY, f64::max),
            mean_age_gyr: ages.sum::<f64>() / results.len() as f64,
            accelerating_today: results.iter().filter(|r| r.deceleration_today < 0.0).count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use friedmann_core::IntegrationConfig;

    fn small_config(seed: u64) -> SimConfig {
        SimConfig {
            seed,
            sweep_count: 12,
            integration: IntegrationConfig {
                steps: 5_000,
                ..IntegrationConfig::default()
            },
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_sweep_is_deterministic() {
        let a = run_sweep(&small_config(42), &SweepRanges::default()).unwrap();
        let b = run_sweep(&small_config(42), &SweepRanges::default()).unwrap();
        assert_eq!(a, b);
        let c = run_sweep(&small_config(43), &SweepRanges::default()).unwrap();
        assert_ne!(a[0].model, c[0].model);
    }

    #[test]
    fn test_sampled_universes_are_flat_and_plausible() {
        let results = run_sweep(&small_config(1), &SweepRanges::default()).unwrap();
        assert_eq!(results.len(), 12);
        for r in &results {
            let total = r.model.matter_density + r.model.lambda_density + r.model.radiation_density;
            assert!((total - 1.0).abs() < 1e-12);
            assert!(r.age_gyr > 10.0 && r.age_gyr < 18.0, "age = {}", r.age_gyr);
            assert!(r.deceleration_today < 0.0);
            assert!(r.acceleration_onset.is_some());
        }
    }

    #[test]
    fn test_summary() {
        let results = run_sweep(&small_config(5), &SweepRanges::default()).unwrap();
        let summary = SweepSummary::from_results(&results).unwrap();
        assert_eq!(summary.count, 12);
        assert!(summary.min_age_gyr <= summary.mean_age_gyr);
        assert!(summary.mean_age_gyr <= summary.max_age_gyr);
        assert_eq!(summary.accelerating_today, 12);
        assert!(SweepSummary::from_results(&[]).is_none());
    }

    #[test]
    fn test_bad_ranges_rejected() {
        let ranges = SweepRanges {
            matter_density: 0.5..0.3,
            ..SweepRanges::default()
        };
        assert!(run_sweep(&small_config(1), &ranges).is_err());

        let ranges = SweepRanges {
            matter_density: 0.5..1.0,
            ..SweepRanges::default()
        };
        assert!(matches!(
            run_sweep(&small_config(1), &ranges),
            Err(CosmologyError::InvalidConfig(_))
        ));
    }
}
