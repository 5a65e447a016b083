//! Error types for the AMR simulator

use thiserror::Error;

/// Core AMR errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmrError {
    // Boundary errors
    #[error("Unknown severity mode: {0:?}")]
    UnknownMode(String),

    // Configuration errors
    #[error("Non-finite value for {field}")]
    NonFinite { field: &'static str },

    #[error("Minimum interval must be positive, got {0}")]
    NonPositiveMinimum(f64),

    #[error("Interval bounds out of order: min {min} <= critical floor {critical_floor} <= max {max} required")]
    BoundsOutOfOrder {
        min: f64,
        critical_floor: f64,
        max: f64,
    },

    #[error("Initial interval {initial} outside [{min}, {max}]")]
    InitialOutOfBounds { initial: f64, min: f64, max: f64 },

    #[error("Decay rate must be negative, got {0}")]
    DecayNotNegative(f64),

    #[error("Growth rate must be positive, got {0}")]
    GrowthNotPositive(f64),

    #[error("History window must hold at least one sample")]
    EmptyHistoryWindow,

    #[error("History window of {requested} samples exceeds the limit of {limit}")]
    HistoryWindowTooLarge { requested: usize, limit: usize },
}

/// Result type for AMR operations
pub type AmrResult<T> = Result<T, AmrError>;
