//! Error types for the charts crate

use thiserror::Error;

/// Errors that can occur when working with charts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// No chart is registered under the given key
    #[error("no chart registered under '{0}'")]
    MissingChart(String),

    /// A donut draw was requested with no data or a non-positive total
    #[error("empty dataset: nothing to draw")]
    EmptyDataset,
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
