use friedmann_core::{
    ComponentDensities, CosmologyError, Epoch, Result, SimConfig, gyr_to_seconds, seconds_to_gyr,
};
use friedmann_physics::quadrature::logspace;
use friedmann_physics::{CosmologicalModel, ScaleGrid};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One point of the expansion history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionSample {
    /// Seconds after the Big Bang
    pub time_s: f64,
    /// Scale factor from the epoch approximation
    pub scale: f64,
    pub epoch: Epoch,
    pub densities: ComponentDensities,
    /// Deceleration parameter at this scale
    pub deceleration: f64,
}

impl EvolutionSample {
    pub fn time_gyr(&self) -> f64 {
        seconds_to_gyr(self.time_s)
    }
}

/// Expansion history of one universe sampled over log-spaced times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionRun {
    pub config: SimConfig,
    /// Age at a = 1 from integrating the Friedmann equation, Gyr
    pub age_today_gyr: f64,
    /// Scale factor where acceleration begins, if it does
    pub acceleration_onset: Option<f64>,
    pub samples: Vec<EvolutionSample>,
}

impl EvolutionRun {
    pub fn run(config: &SimConfig) -> Result<Self> {
        if config.time_samples < 2 {
            return Err(CosmologyError::InvalidConfig(format!(
                "need at least 2 time samples, got {}",
                config.time_samples
            )));
        }
        if !config.start_time_s.is_finite() || config.start_time_s <= 0.0 {
            return Err(CosmologyError::NonPositiveTime(config.start_time_s));
        }
        let end_time_s = gyr_to_seconds(config.end_time_gyr);
        if !end_time_s.is_finite() || end_time_s <= config.start_time_s {
            return Err(CosmologyError::InvalidConfig(format!(
                "end time {} Gyr must come after start time {} s",
                config.end_time_gyr, config.start_time_s
            )));
        }

        let model = CosmologicalModel::from_config(&config.model)?;
        info!(
            "Evolution run: Omega_m={} Omega_l={} Omega_r={} H0={} ({} samples)",
            model.matter_density(),
            model.lambda_density(),
            model.radiation_density(),
            model.hubble_constant(),
            config.time_samples
        );

        let age_today_gyr = model.cosmic_time(1.0, &ScaleGrid::from(config.integration))?;
        let acceleration_onset = model.acceleration_onset_scale()?;
        info!("Age at a=1: {:.3} Gyr", age_today_gyr);

        let mut samples = Vec::with_capacity(config.time_samples);
        let mut last_epoch = None;
        for time_s in logspace(config.start_time_s, end_time_s, config.time_samples) {
            let scale = model.scale_at_time(time_s)?;
            let epoch = model.epoch_at_time(time_s)?;
            if last_epoch != Some(epoch) {
                debug!("{} begins at {:.3e} s (a = {:.3e})", epoch.name(), time_s, scale);
                last_epoch = Some(epoch);
            }
            samples.push(EvolutionSample {
                time_s,
                scale,
                epoch,
                densities: model.density_at_scale(scale)?,
                deceleration: model.deceleration_parameter(scale)?,
            });
        }

        Ok(Self {
            config: config.clone(),
            age_today_gyr,
            acceleration_onset,
            samples,
        })
    }

    /// Sample whose scale factor is closest to today's (a = 1)
    pub fn present_day(&self) -> Option<&EvolutionSample> {
        self.samples
            .iter()
            .min_by(|a, b| (a.scale - 1.0).abs().total_cmp(&(b.scale - 1.0).abs()))
    }

    /// (epoch, first sample time, last sample time) for each contiguous era
    pub fn epoch_spans(&self) -> Vec<(Epoch, f64, f64)> {
        let mut spans: Vec<(Epoch, f64, f64)> = Vec::new();
        for s in &self.samples {
            match spans.last_mut() {
                Some(span) if span.0 == s.epoch => span.2 = s.time_s,
                _ => spans.push((s.epoch, s.time_s, s.time_s)),
            }
        }
        spans
    }

    /// Evenly thinned subset of samples for printing, always keeping the last
    pub fn thinned(&self, rows: usize) -> Vec<&EvolutionSample> {
        if rows == 0 || self.samples.is_empty() {
            return Vec::new();
        }
        let last = self.samples.len() - 1;
        let stride = self.samples.len().div_ceil(rows);
        let mut out: Vec<&EvolutionSample> = self.samples.iter().step_by(stride).collect();
        if last % stride != 0 {
            out.push(&self.samples[last]);
        }
        out
    }
}
