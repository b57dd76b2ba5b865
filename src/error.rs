//! Error types for matrix validation, planning and matrix providers.

use thiserror::Error;

/// A candidate matrix failed validation before reaching the solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("matrix is empty")]
    Empty,

    #[error("matrix must be square: row {row} has {len} entries, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("invalid number in row {row}: {value:?}")]
    InvalidNumber { row: usize, value: String },

    #[error("entry at row {row}, column {col} is not a number")]
    NotANumber { row: usize, col: usize },

    #[error("entry at row {row}, column {col} is negative: {value}")]
    Negative { row: usize, col: usize, value: f64 },
}

/// The planner refused to run the solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("{cities} cities exceeds the limit of {limit}")]
    TooManyCities { cities: usize, limit: usize },
}

/// A matrix provider could not produce a usable matrix.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("matrix request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("matrix response carried no durations")]
    MissingDurations,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Fetching a matrix from a provider and planning over it.
#[derive(Debug, Error)]
pub enum LocationsError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}
