pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::{IntegrationConfig, ModelConfig, SimConfig};
pub use constants::*;
pub use error::{CosmologyError, ErrorKind, Result};
pub use types::*;
