//! Error types for the DFS lineup engine

use thiserror::Error;

use crate::cli::types::LineupId;


pub type Result<T> = std::result::Result<T, LineupError>;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV writing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Salary cap not provided and {env_var} environment variable not set")]
    MissingSalaryCap { env_var: String },

    #[error("Failed to parse salary cap: {0}")]
    InvalidSalaryCap(#[from] std::num::ParseIntError),

    #[error("Unknown sort field: {field}")]
    InvalidSortField { field: String },

    #[error("Duplicate lineup id: {id}")]
    DuplicateLineupId { id: LineupId },

    #[error("Too many lineups: {count} exceeds the limit of {max}")]
    TooManyLineups { count: usize, max: usize },

    #[error("No lineups under the salary cap to export ({total} over cap)")]
    NoExportableRows { total: usize },
}

impl<W> From<csv::IntoInnerError<W>> for LineupError {
    fn from(err: csv::IntoInnerError<W>) -> Self {
        LineupError::Io(err.into_error())
    }
}
