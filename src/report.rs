//! Plain-text rendering of evolution runs and sweeps

use friedmann_core::{SimConfig, seconds_to_gyr};
use friedmann_physics::{CosmologicalModel, EpochTransitions};
use friedmann_sim::{EvolutionRun, EvolutionSample, SweepResult, SweepSummary};

/// Format a time given in seconds with a readable unit
pub fn fmt_time(seconds: f64) -> String {
    let gyr = seconds_to_gyr(seconds);
    if gyr >= 1.0 {
        format!("{:.2} Gyr", gyr)
    } else if gyr >= 1e-3 {
        format!("{:.1} Myr", gyr * 1e3)
    } else if gyr >= 1e-6 {
        format!("{:.1} kyr", gyr * 1e6)
    } else {
        format!("{:.3e} s", seconds)
    }
}

pub fn header(config: &SimConfig) -> String {
    let m = &config.model;
    let mut lines = Vec::new();
    lines.push("╔══════════════════════════════════════════════════════════════╗".to_string());
    lines.push("║    FLRW EXPANSION HISTORY                                    ║".to_string());
    lines.push("╚══════════════════════════════════════════════════════════════╝".to_string());
    lines.push(format!(
        "Omega_m = {}  Omega_lambda = {}  Omega_r = {}  H0 = {} km/s/Mpc",
        m.matter_density, m.lambda_density, m.radiation_density, m.hubble_constant
    ));
    lines.push(format!("Curvature placeholder 1 - sum(Omega) = {:.3e}", m.curvature_density()));
    lines.join("\n")
}

pub fn transitions(tr: &EpochTransitions) -> String {
    format!(
        "Radiation-matter equality: a = {:.3e} at {}\nMatter-lambda equality:    a = {:.3} at {}",
        tr.scale_rm,
        fmt_time(tr.time_rm),
        tr.scale_ml,
        fmt_time(tr.time_ml)
    )
}

fn row(s: &EvolutionSample) -> String {
    let d = &s.densities;
    format!(
        "{:>12}  {:>10.3e}  {:<16}  {:>9.4}  {:>9.4}  {:>9.3e}  {:>7.3}",
        fmt_time(s.time_s),
        s.scale,
        s.epoch.name(),
        d.matter(),
        d.lambda(),
        d.radiation(),
        s.deceleration
    )
}

pub fn evolution_table(run: &EvolutionRun, rows: usize) -> String {
    let mut lines = vec![format!(
        "{:>12}  {:>10}  {:<16}  {:>9}  {:>9}  {:>9}  {:>7}",
        "time", "scale", "epoch", "Omega_m", "Omega_l", "Omega_r", "q"
    )];
    lines.push("─".repeat(84));
    lines.extend(run.thinned(rows).into_iter().map(row));
    lines.join("\n")
}

pub fn evolution_report(run: &EvolutionRun, rows: usize) -> String {
    let mut out = vec![header(&run.config)];
    if let Ok(model) = CosmologicalModel::from_config(&run.config.model) {
        if let Ok(tr) = model.epoch_transitions() {
            out.push(transitions(&tr));
        }
    }
    out.push(format!("Age at a = 1: {:.3} Gyr", run.age_today_gyr));
    match run.acceleration_onset {
        Some(a) => out.push(format!("Acceleration begins at a = {:.3}", a)),
        None => out.push("Expansion never accelerates".to_string()),
    }
    for (epoch, start, end) in run.epoch_spans() {
        out.push(format!("  {:16} {} → {}", epoch.name(), fmt_time(start), fmt_time(end)));
    }
    out.push(String::new());
    out.push(evolution_table(run, rows));
    out.join("\n")
}

pub fn sweep_report(results: &[SweepResult], summary: &SweepSummary) -> String {
    let mut lines = vec![
        format!("SWEEP OF {} FLAT UNIVERSES", summary.count),
        format!(
            "Age: min {:.2} Gyr, mean {:.2} Gyr, max {:.2} Gyr",
            summary.min_age_gyr, summary.mean_age_gyr, summary.max_age_gyr
        ),
        format!(
            "{}/{} accelerating today",
            summary.accelerating_today, summary.count
        ),
        String::new(),
        format!(
            "{:>4}  {:>7}  {:>7}  {:>9}  {:>6}  {:>8}  {:>7}  {:>9}",
            "#", "Omega_m", "Omega_l", "Omega_r", "H0", "age", "q0", "a(13.75)"
        ),
    ];
    for r in results {
        lines.push(format!(
            "{:>4}  {:>7.4}  {:>7.4}  {:>9.3e}  {:>6.2}  {:>8.3}  {:>7.3}  {:>9.4}",
            r.index + 1,
            r.model.matter_density,
            r.model.lambda_density,
            r.model.radiation_density,
            r.model.hubble_constant,
            r.age_gyr,
            r.deceleration_today,
            r.scale_at_benchmark_age
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use friedmann_core::gyr_to_seconds;

    #[test]
    fn test_fmt_time_units() {
        assert_eq!(fmt_time(gyr_to_seconds(13.75)), "13.75 Gyr");
        assert_eq!(fmt_time(gyr_to_seconds(0.38)), "380.0 Myr");
        assert_eq!(fmt_time(gyr_to_seconds(5e-5)), "50.0 kyr");
        assert_eq!(fmt_time(1.0), "1.000e0 s");
    }

    #[test]
    fn test_evolution_report_mentions_every_epoch() {
        let config = SimConfig {
            time_samples: 60,
            ..SimConfig::default()
        };
        let run = EvolutionRun::run(&config).unwrap();
        let report = evolution_report(&run, 10);
        assert!(report.contains("Radiation Era"));
        assert!(report.contains("Matter Era"));
        assert!(report.contains("Dark Energy Era"));
        assert!(report.contains("Age at a = 1"));
    }
}
