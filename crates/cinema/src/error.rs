use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CinemaError>;

#[derive(Debug, Error)]
pub enum CinemaError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Row {row} is out of range (auditorium has {rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("Block of {amount} seats starting at row {row}, seat {column} is out of range")]
    OutOfRange {
        row: usize,
        column: usize,
        amount: usize,
    },

    #[error("Failed to load config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl CinemaError {
    /// True for both row and block range failures.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            CinemaError::RowOutOfRange { .. } | CinemaError::OutOfRange { .. }
        )
    }
}
