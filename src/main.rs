//! Expansion history of the benchmark universe: scale factor, epoch and
//! density parameters from the Big Bang to 500 Gyr.

use friedmann::{init_logging, report};
use friedmann_core::SimConfig;
use friedmann_sim::EvolutionRun;
use friedmann_storage::{EvolutionSnapshot, load_snapshot, save_snapshot};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

const USAGE: &str = "usage: friedmann [--rows N] [--save PATH | --load PATH]";

struct Args {
    rows: usize,
    save: Option<PathBuf>,
    load: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args {
        rows: 30,
        save: None,
        load: None,
    };
    while let Some(flag) = args.next() {
        let mut value = || args.next().ok_or_else(|| format!("{flag} needs a value"));
        match flag.as_str() {
            "--rows" => {
                let v = value()?;
                parsed.rows = v.parse().map_err(|_| format!("invalid row count: {v}"))?;
            }
            "--save" => parsed.save = Some(PathBuf::from(value()?)),
            "--load" => parsed.load = Some(PathBuf::from(value()?)),
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    if parsed.save.is_some() && parsed.load.is_some() {
        return Err("--save and --load are exclusive".into());
    }
    Ok(parsed)
}

fn main() -> ExitCode {
    init_logging();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let run = match &args.load {
        Some(path) => load_snapshot(path)
            .map(EvolutionSnapshot::into_run)
            .map_err(|e| e.to_string()),
        None => EvolutionRun::run(&SimConfig::default()).map_err(|e| e.to_string()),
    };
    let run = match run {
        Ok(run) => run,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = &args.save {
        if let Err(e) = save_snapshot(&EvolutionSnapshot::from_run(&run), path) {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    }

    info!("Rendering {} of {} samples", args.rows.min(run.samples.len()), run.samples.len());
    println!("{}", report::evolution_report(&run, args.rows));
    ExitCode::SUCCESS
}
