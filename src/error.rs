use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// The review dataset could not be opened or read. Nothing renders without it.
    #[error("Dataset unavailable at {}: {reason}", path.display())]
    DataUnavailable { path: PathBuf, reason: String },

    #[error("Schema error in {}: {message}", path.display())]
    Schema { path: PathBuf, message: String },

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

impl DashboardError {
    pub fn unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        DashboardError::DataUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn schema(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DashboardError::Schema {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
