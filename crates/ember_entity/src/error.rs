//! Error types for health mutation

use thiserror::Error;

/// Health mutation errors
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum HealthError {
    /// Health outside `0 ..= max` on a set
    #[error("health {value} out of range (0 to {max})")]
    HealthOutOfRange { value: f64, max: f64 },

    /// Maximum health negative or above the representable ceiling
    #[error("maximum health {value} out of range (0 to {ceiling})")]
    MaxHealthOutOfRange { value: f64, ceiling: f64 },

    /// Value is NaN or infinite
    #[error("expected a finite health value, got {0}")]
    NotFinite(f64),
}

/// Result type for health mutations
pub type Result<T> = std::result::Result<T, HealthError>;
