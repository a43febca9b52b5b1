use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Import source not found: {path}")]
    SourceNotFound { path: String },

    #[error("Validation error on {field}: '{value}' ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ShelfError>;

/// Per-row import failure. Recovered locally by the loader, never propagated
/// as a `ShelfError`.
#[derive(Error, Debug)]
pub enum RowError {
    #[error("line {line}: expected 4 fields, got {count}")]
    FieldCount { line: u64, count: usize },

    #[error("line {line}: invalid rating '{value}': {reason}")]
    Rating {
        line: u64,
        value: String,
        reason: String,
    },

    #[error("line {line}: malformed row: {source}")]
    Malformed { line: u64, source: csv::Error },
}

impl RowError {
    pub fn line(&self) -> u64 {
        match self {
            RowError::FieldCount { line, .. }
            | RowError::Rating { line, .. }
            | RowError::Malformed { line, .. } => *line,
        }
    }
}
