use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INTEGRATION_STEPS, DEFAULT_START_SCALE};

/// Present-day parameters of a cosmological model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Matter density parameter Omega_m0
    pub matter_density: f64,
    /// Cosmological constant density parameter Omega_lambda0
    pub lambda_density: f64,
    /// Radiation density parameter Omega_r0
    pub radiation_density: f64,
    /// Hubble constant in km/s/Mpc
    pub hubble_constant: f64,
}

impl ModelConfig {
    /// Flat Lambda-CDM benchmark: Omega_m = 0.31, Omega_lambda = 0.69,
    /// Omega_r = 9e-5, H0 = 68 km/s/Mpc
    pub const BENCHMARK: Self = Self {
        matter_density: 0.31,
        lambda_density: 0.69,
        radiation_density: 9e-5,
        hubble_constant: 68.0,
    };

    /// Curvature placeholder 1 - sum(Omega)
    pub fn curvature_density(&self) -> f64 {
        1.0 - self.matter_density - self.lambda_density - self.radiation_density
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::BENCHMARK
    }
}

/// Grid used to integrate the Friedmann equation for cosmic time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    /// First (smallest) scale factor on the log-spaced grid
    pub start_scale: f64,
    /// Number of grid points
    pub steps: usize,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            start_scale: DEFAULT_START_SCALE,
            steps: DEFAULT_INTEGRATION_STEPS,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Cosmological parameters of the simulated universe
    pub model: ModelConfig,
    /// Cosmic time integration settings
    pub integration: IntegrationConfig,
    /// Number of log-spaced time samples in an evolution run
    pub time_samples: usize,
    /// First sampled time, seconds after the Big Bang
    pub start_time_s: f64,
    /// Last sampled time, Gyr after the Big Bang
    pub end_time_gyr: f64,
    /// Random seed for deterministic parameter sweeps
    pub seed: u64,
    /// Number of universes drawn in a parameter sweep
    pub sweep_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            integration: IntegrationConfig::default(),
            time_samples: 1000,
            start_time_s: 1.0,
            end_time_gyr: 500.0,
            seed: 42,
            sweep_count: 100,
        }
    }
}
