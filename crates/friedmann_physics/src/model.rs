use friedmann_core::{
    Arity, Component, ComponentDensities, ComponentPair, CosmologyError, ModelConfig, Result,
    hubble_per_second,
};

/// Homogeneous, isotropic (FLRW) universe described by its present-day
/// density parameters and Hubble constant.
///
/// The three-component density solver assumes the densities sum to 1 at
/// a = 1 (flat universe). This is not checked: a non-flat input still
/// yields densities that sum to 1 at every queried scale, but they will
/// not reproduce the literal inputs at a != 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosmologicalModel {
    matter_density: f64,
    lambda_density: f64,
    radiation_density: f64,
    hubble_constant: f64,
}

impl CosmologicalModel {
    /// Build a model from present-day densities and H0 in km/s/Mpc.
    /// Densities must be finite and >= 0, H0 finite and > 0.
    pub fn new(
        matter_density: f64,
        lambda_density: f64,
        radiation_density: f64,
        hubble_constant: f64,
    ) -> Result<Self> {
        for (component, value) in [
            (Component::Matter, matter_density),
            (Component::Lambda, lambda_density),
            (Component::Radiation, radiation_density),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CosmologyError::InvalidDensity { component, value });
            }
        }
        if !hubble_constant.is_finite() || hubble_constant <= 0.0 {
            return Err(CosmologyError::NonPositiveHubble(hubble_constant));
        }
        Ok(Self {
            matter_density,
            lambda_density,
            radiation_density,
            hubble_constant,
        })
    }

    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        Self::new(
            config.matter_density,
            config.lambda_density,
            config.radiation_density,
            config.hubble_constant,
        )
    }

    /// Flat Lambda-CDM benchmark universe
    pub fn benchmark() -> Self {
        let b = ModelConfig::BENCHMARK;
        Self {
            matter_density: b.matter_density,
            lambda_density: b.lambda_density,
            radiation_density: b.radiation_density,
            hubble_constant: b.hubble_constant,
        }
    }

    pub fn config(&self) -> ModelConfig {
        ModelConfig {
            matter_density: self.matter_density,
            lambda_density: self.lambda_density,
            radiation_density: self.radiation_density,
            hubble_constant: self.hubble_constant,
        }
    }

    pub fn matter_density(&self) -> f64 {
        self.matter_density
    }

    pub fn lambda_density(&self) -> f64 {
        self.lambda_density
    }

    pub fn radiation_density(&self) -> f64 {
        self.radiation_density
    }

    /// H0 in km/s/Mpc
    pub fn hubble_constant(&self) -> f64 {
        self.hubble_constant
    }

    /// H0 in 1/s
    pub fn hubble_rate(&self) -> f64 {
        hubble_per_second(self.hubble_constant)
    }

    /// Curvature placeholder 1 - sum(Omega)
    pub fn curvature_density(&self) -> f64 {
        self.config().curvature_density()
    }

    pub fn arity(&self) -> Arity {
        Arity::classify(
            self.matter_density,
            self.lambda_density,
            self.radiation_density,
        )
    }

    /// Number of strictly positive density parameters
    pub fn component_count(&self) -> usize {
        self.arity().count()
    }

    /// Density parameters of the present components at the given scale
    /// factor. The result always sums to 1.
    ///
    /// Three components: solves Omega_m + Omega_l + Omega_r = 1 using the
    /// ratios of matter (~a^-3) and radiation (~a^-4) to the constant lambda
    /// term. Two components: the same reduction with a single ratio.
    /// Fewer than two components cannot be normalised and are rejected.
    ///
    /// The ratios are multiplied through by a^4 and weighted in log space,
    /// so a^4 never underflows or overflows for scales far from 1.
    pub fn density_at_scale(&self, scale: f64) -> Result<ComponentDensities> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CosmologyError::NonPositiveScale(scale));
        }
        let ln_a = scale.ln();

        match self.arity() {
            Arity::Three => {
                if scale == 1.0 {
                    return Ok(ComponentDensities::Three {
                        matter: self.matter_density,
                        lambda: self.lambda_density,
                        radiation: self.radiation_density,
                    });
                }
                debug_assert!(self.lambda_density > 0.0);

                // Omega_m0 a : Omega_l0 a^4 : Omega_r0
                let [matter, lambda, radiation] = normalize_log_weights([
                    self.matter_density.ln() + ln_a,
                    self.lambda_density.ln() + 4.0 * ln_a,
                    self.radiation_density.ln(),
                ]);
                Ok(ComponentDensities::Three {
                    matter,
                    lambda,
                    radiation,
                })
            }
            Arity::Two(pair) => {
                let [primary, secondary] = match pair {
                    ComponentPair::MatterLambda => {
                        debug_assert!(self.lambda_density > 0.0);
                        normalize_log_weights([
                            self.matter_density.ln(),
                            self.lambda_density.ln() + 3.0 * ln_a,
                        ])
                    }
                    ComponentPair::MatterRadiation => {
                        debug_assert!(self.matter_density > 0.0);
                        normalize_log_weights([
                            self.matter_density.ln() + ln_a,
                            self.radiation_density.ln(),
                        ])
                    }
                    ComponentPair::LambdaRadiation => {
                        debug_assert!(self.lambda_density > 0.0);
                        normalize_log_weights([
                            self.lambda_density.ln() + 4.0 * ln_a,
                            self.radiation_density.ln(),
                        ])
                    }
                };
                Ok(ComponentDensities::Two {
                    pair,
                    primary,
                    secondary,
                })
            }
            Arity::Underdetermined(present) => Err(CosmologyError::Underdetermined { present }),
        }
    }

    /// Deceleration parameter q = Omega_r + Omega_m / 2 - Omega_l at the
    /// given scale. Negative values mean accelerating expansion.
    pub fn deceleration_parameter(&self, scale: f64) -> Result<f64> {
        let d = self.density_at_scale(scale)?;
        Ok(d.radiation() + 0.5 * d.matter() - d.lambda())
    }

    /// Scale factor at which expansion starts to accelerate (q = 0),
    /// bisected in log a over [1e-8, 1e8]. `None` if q keeps one sign
    /// over that range.
    pub fn acceleration_onset_scale(&self) -> Result<Option<f64>> {
        let (mut lo, mut hi) = (1e-8f64.ln(), 1e8f64.ln());
        let q_lo = self.deceleration_parameter(lo.exp())?;
        let q_hi = self.deceleration_parameter(hi.exp())?;
        if q_lo <= 0.0 || q_hi > 0.0 {
            return Ok(None);
        }
        for _ in 0..100 {
            let mid = 0.5 * (lo + hi);
            if self.deceleration_parameter(mid.exp())? > 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Ok(Some((0.5 * (lo + hi)).exp()))
    }

    /// a^2 E^2(a): the bracket of the Friedmann equation,
    /// Omega_r/a^2 + Omega_m/a + Omega_l a^2 + Omega_k
    pub fn friedmann_term(&self, scale: f64) -> f64 {
        self.radiation_density / (scale * scale)
            + self.matter_density / scale
            + self.lambda_density * scale * scale
            + self.curvature_density()
    }
}

/// Normalise weights given by their logarithms so they sum to 1.
/// The largest weight is pinned at exp(0) before dividing, so extreme
/// logs round to 0 or 1 instead of inf or NaN.
fn normalize_log_weights<const N: usize>(logs: [f64; N]) -> [f64; N] {
    let max = logs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let weights = logs.map(|l| (l - max).exp());
    let total: f64 = weights.iter().sum();
    weights.map(|w| w / total)
}
