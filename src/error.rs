//! Error types shared by the data provider and the statistics pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading tables or computing statistics
///
/// `MissingFile` is fatal to a whole analysis session. `NotFound` and `Domain`
/// are local to a single computation.
#[derive(Error, Debug)]
pub enum CestaError {
    #[error("Table file not found: {} (run `cesta prepare` first)", path.display())]
    MissingFile { path: PathBuf },

    #[error("'{key}' not found in table {table}")]
    NotFound { table: String, key: String },

    #[error("Statistical domain error: {0}")]
    Domain(String),

    #[error("Invalid table schema in {table}: {reason}")]
    Schema { table: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CestaError {
    pub(crate) fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }

    pub(crate) fn not_found(table: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NotFound {
            table: table.into(),
            key: key.into(),
        }
    }
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, CestaError>;
