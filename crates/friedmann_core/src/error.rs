//! Error types for the cosmological model

use thiserror::Error;

use crate::Component;

/// Broad category of a [`CosmologyError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied a value outside the model's domain
    InvalidParameter,
    /// Inputs are well-formed but describe a universe the formulas cannot handle
    Unphysical,
}

/// Cosmology errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CosmologyError {
    #[error("Invalid {component} density: {value} (must be finite and >= 0)")]
    InvalidDensity { component: Component, value: f64 },

    #[error("Hubble constant must be positive and finite, got {0} km/s/Mpc")]
    NonPositiveHubble(f64),

    #[error("Scale factor must be positive and finite, got {0}")]
    NonPositiveScale(f64),

    #[error("Cosmic time must be positive and finite, got {0} s")]
    NonPositiveTime(f64),

    #[error("Underdetermined model: {present} nonzero density component(s), need at least 2")]
    Underdetermined { present: usize },

    #[error("Invalid integration grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Epoch approximation unavailable: {0}")]
    EpochsUnresolved(&'static str),

    #[error("Friedmann equation has no real expansion rate at scale {0}")]
    NoRealExpansion(f64),

    #[error("Scale factor overflows f64 at t = {0} s")]
    ScaleOverflow(f64),
}

impl CosmologyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoRealExpansion(_) => ErrorKind::Unphysical,
            _ => ErrorKind::InvalidParameter,
        }
    }
}

pub type Result<T> = std::result::Result<T, CosmologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            CosmologyError::Underdetermined { present: 1 }.kind(),
            ErrorKind::InvalidParameter
        );
        assert_eq!(CosmologyError::NonPositiveTime(0.0).kind(), ErrorKind::InvalidParameter);
        assert_eq!(CosmologyError::NoRealExpansion(2.0).kind(), ErrorKind::Unphysical);
        assert_eq!(CosmologyError::ScaleOverflow(1e22).kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_error_messages() {
        let err = CosmologyError::InvalidDensity {
            component: Component::Radiation,
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Invalid radiation density: -1 (must be finite and >= 0)");
    }
}
