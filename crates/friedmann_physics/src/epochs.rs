use friedmann_core::{
    Arity, CosmologyError, Epoch, LAMBDA_ERA_DAMPING, LAMBDA_HANDOFF, RADIATION_HANDOFF, Result,
};

use crate::model::CosmologicalModel;

/// Equality scales and times separating the radiation, matter and lambda eras
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochTransitions {
    /// Radiation-matter equality, Omega_r0 / Omega_m0
    pub scale_rm: f64,
    /// Matter-lambda equality, (Omega_m0 / Omega_l0)^(1/3)
    pub scale_ml: f64,
    /// Time of radiation-matter equality, seconds
    pub time_rm: f64,
    /// Time of matter-lambda equality, seconds
    pub time_ml: f64,
}

impl EpochTransitions {
    /// Transition times come from the exact two-component solutions:
    /// radiation + matter for `time_rm`, matter + lambda for `time_ml`,
    /// each evaluated at its equality scale.
    pub fn for_model(model: &CosmologicalModel) -> Result<Self> {
        if model.arity() != Arity::Three {
            return Err(CosmologyError::EpochsUnresolved(
                "matter, radiation and lambda must all be present",
            ));
        }
        if model.matter_density() >= 1.0 {
            return Err(CosmologyError::EpochsUnresolved(
                "lambda era needs a matter density below 1",
            ));
        }

        let hubble = model.hubble_rate();
        let matter = model.matter_density();
        let lambda = model.lambda_density();
        let radiation = model.radiation_density();

        let scale_rm = radiation / matter;
        let scale_ml = (matter / lambda).cbrt();

        // a(t) for radiation + matter, inverted at a = scale_rm
        let time_rm = 4.0 / 3.0 * (1.0 - std::f64::consts::FRAC_1_SQRT_2) * scale_rm * scale_rm
            / (radiation.sqrt() * hubble);
        // a(t) = scale_ml * sinh^(2/3)(1.5 sqrt(Omega_l) H0 t), inverted at a = scale_ml
        let time_ml = 1f64.asinh() / (1.5 * lambda.sqrt() * hubble);

        Ok(Self {
            scale_rm,
            scale_ml,
            time_rm,
            time_ml,
        })
    }

    pub fn epoch_at(&self, time: f64) -> Epoch {
        if time < RADIATION_HANDOFF * self.time_rm {
            Epoch::Radiation
        } else if time < LAMBDA_HANDOFF * self.time_ml {
            Epoch::Matter
        } else {
            Epoch::Lambda
        }
    }
}

impl CosmologicalModel {
    pub fn epoch_transitions(&self) -> Result<EpochTransitions> {
        EpochTransitions::for_model(self)
    }

    /// Epoch in effect `time` seconds after the Big Bang
    pub fn epoch_at_time(&self, time: f64) -> Result<Epoch> {
        check_time(time)?;
        Ok(self.epoch_transitions()?.epoch_at(time))
    }

    /// Scale factor `time` seconds after the Big Bang, approximated by the
    /// power law (or exponential) of whichever component dominates.
    ///
    /// Valid for Lambda-CDM-like parameters where the eras are well
    /// separated. The lambda-era damping is calibrated on the benchmark
    /// universe so that a(13.75 Gyr) ~ 1. The exponential leaves f64 range
    /// around t ~ 1e21 s for the benchmark; later times are rejected.
    pub fn scale_at_time(&self, time: f64) -> Result<f64> {
        check_time(time)?;
        let transitions = self.epoch_transitions()?;
        let hubble = self.hubble_rate();

        let radiation_law = (2.0 * self.radiation_density().sqrt() * hubble * time).sqrt();
        let scale = match transitions.epoch_at(time) {
            Epoch::Radiation => radiation_law,
            Epoch::Matter => {
                // The matter law starts below the radiation law; hold the
                // radiation curve until the matter curve overtakes it.
                let matter_law = (1.5 * self.matter_density().sqrt() * hubble * time).powf(2.0 / 3.0);
                matter_law.max(radiation_law)
            }
            Epoch::Lambda => {
                transitions.scale_ml
                    * ((1.0 - self.matter_density()).sqrt() * hubble * time / LAMBDA_ERA_DAMPING)
                        .exp()
            }
        };
        if !scale.is_finite() {
            return Err(CosmologyError::ScaleOverflow(time));
        }
        Ok(scale)
    }
}

fn check_time(time: f64) -> Result<()> {
    if !time.is_finite() || time <= 0.0 {
        return Err(CosmologyError::NonPositiveTime(time));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrature::logspace;
    use friedmann_core::{ErrorKind, SECONDS_PER_GYR, gyr_to_seconds};

    #[test]
    fn test_benchmark_transitions() {
        let tr = CosmologicalModel::benchmark().epoch_transitions().unwrap();
        assert!((tr.scale_rm - 9e-5 / 0.31).abs() < 1e-15);
        assert!((tr.scale_ml - 0.7659).abs() < 1e-3, "scale_ml = {}", tr.scale_ml);
        // Equality ~50 kyr and ~10 Gyr after the Big Bang
        let rm_kyr = tr.time_rm / SECONDS_PER_GYR * 1e6;
        assert!(rm_kyr > 40.0 && rm_kyr < 60.0, "time_rm = {} kyr", rm_kyr);
        let ml_gyr = tr.time_ml / SECONDS_PER_GYR;
        assert!(ml_gyr > 9.5 && ml_gyr < 11.0, "time_ml = {} Gyr", ml_gyr);
    }

    #[test]
    fn test_scale_today_near_one() {
        let model = CosmologicalModel::benchmark();
        let a = model.scale_at_time(gyr_to_seconds(13.75)).unwrap();
        assert!((a - 1.0).abs() < 0.03, "a(13.75 Gyr) = {}", a);
        assert_eq!(model.epoch_at_time(gyr_to_seconds(13.75)).unwrap(), Epoch::Lambda);
    }

    #[test]
    fn test_radiation_era_square_root_law() {
        let model = CosmologicalModel::benchmark();
        let a1 = model.scale_at_time(1.0).unwrap();
        let a4 = model.scale_at_time(4.0).unwrap();
        assert!((a4 / a1 - 2.0).abs() < 1e-12);
        assert_eq!(model.epoch_at_time(1.0).unwrap(), Epoch::Radiation);
    }

    #[test]
    fn test_matter_era_value() {
        let model = CosmologicalModel::benchmark();
        let t = gyr_to_seconds(1.0);
        assert_eq!(model.epoch_at_time(t).unwrap(), Epoch::Matter);
        let a = model.scale_at_time(t).unwrap();
        // (1.5 sqrt(0.31) H0 * 1 Gyr)^(2/3)
        assert!((a - 0.1499).abs() < 0.002, "a(1 Gyr) = {}", a);
    }

    #[test]
    fn test_scale_monotonic_in_time() {
        let model = CosmologicalModel::benchmark();
        let times = logspace(1.0, gyr_to_seconds(500.0), 5000);
        let scales: Vec<f64> = times.iter().map(|&t| model.scale_at_time(t).unwrap()).collect();
        for (i, w) in scales.windows(2).enumerate() {
            assert!(w[1] > w[0], "a({}) = {} not above {}", times[i + 1], w[1], w[0]);
        }
    }

    #[test]
    fn test_non_positive_time_rejected() {
        let model = CosmologicalModel::benchmark();
        let err = model.scale_at_time(0.0).unwrap_err();
        assert_eq!(err, CosmologyError::NonPositiveTime(0.0));
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert!(model.scale_at_time(-5.0).is_err());
        assert!(model.epoch_at_time(f64::NAN).is_err());
    }

    #[test]
    fn test_lambda_era_overflow_rejected() {
        let model = CosmologicalModel::benchmark();
        let a = model.scale_at_time(1e21).unwrap();
        assert!(a.is_finite() && a > 1e260, "a(1e21 s) = {}", a);
        let err = model.scale_at_time(1e22).unwrap_err();
        assert_eq!(err, CosmologyError::ScaleOverflow(1e22));
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert!(model.scale_at_time(f64::MAX).is_err());
    }

    #[test]
    fn test_missing_epoch_rejected() {
        let model = CosmologicalModel::new(0.3, 0.7, 0.0, 70.0).unwrap();
        assert!(matches!(
            model.scale_at_time(1e10),
            Err(CosmologyError::EpochsUnresolved(_))
        ));
    }
}
