//! Monte Carlo sweep over flat Lambda-CDM universes.
//! Reports how age and present-day deceleration vary with Omega_m and H0.

use friedmann::{init_logging, report};
use friedmann_core::SimConfig;
use friedmann_sim::sweep::run_sweep;
use friedmann_sim::{SweepRanges, SweepSummary};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    init_logging();

    let mut config = SimConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse() {
            Ok(seed) => config.seed = seed,
            Err(_) => {
                eprintln!("usage: sweep [SEED]");
                return ExitCode::from(2);
            }
        }
    }

    let results = match run_sweep(&config, &SweepRanges::default()) {
        Ok(results) => results,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let Some(summary) = SweepSummary::from_results(&results) else {
        eprintln!("Sweep produced no universes");
        return ExitCode::FAILURE;
    };

    println!("{}", report::sweep_report(&results, &summary));
    ExitCode::SUCCESS
}
