//! Error types for grid construction.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid grid dimensions {rows}x{columns}: both must be at least 1")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("grid of {rows}x{columns} cells does not fit in memory")]
    TooLarge { rows: usize, columns: usize },

    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid alive density {0}: must lie within 0.0..=1.0")]
    InvalidDensity(f64),
}
