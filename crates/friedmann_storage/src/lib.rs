use friedmann_core::SimConfig;
use friedmann_sim::{EvolutionRun, EvolutionSample};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Complete evolution run snapshot for save/load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionSnapshot {
    pub run_id: Uuid,
    pub config: SimConfig,
    pub age_today_gyr: f64,
    pub acceleration_onset: Option<f64>,
    pub samples: Vec<EvolutionSample>,
}

impl EvolutionSnapshot {
    pub fn from_run(run: &EvolutionRun) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            config: run.config.clone(),
            age_today_gyr: run.age_today_gyr,
            acceleration_onset: run.acceleration_onset,
            samples: run.samples.clone(),
        }
    }

    pub fn into_run(self) -> EvolutionRun {
        EvolutionRun {
            config: self.config,
            age_today_gyr: self.age_today_gyr,
            acceleration_onset: self.acceleration_onset,
            samples: self.samples,
        }
    }
}

/// Save a snapshot to disk as bincode
pub fn save_snapshot(snapshot: &EvolutionSnapshot, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = bincode::serialize(snapshot)?;
    fs::write(path, &data)?;
    info!(
        "Saved run {} ({} samples, {} bytes) to {}",
        snapshot.run_id,
        snapshot.samples.len(),
        data.len(),
        path.display()
    );
    Ok(())
}

/// Load a snapshot from disk
pub fn load_snapshot(path: &Path) -> Result<EvolutionSnapshot, StorageError> {
    let data = fs::read(path)?;
    let snapshot: EvolutionSnapshot = bincode::deserialize(&data)?;
    info!("Loaded run {} from {}", snapshot.run_id, path.display());
    Ok(snapshot)
}
