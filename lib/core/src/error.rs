use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column length mismatch for {name}: expected {expected} rows, got {actual}")]
    ColumnLength {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Row index out of bounds: {index} (frame has {rows} rows)")]
    RowOutOfBounds { index: usize, rows: usize },

    #[error("Input has no header row")]
    MissingHeader,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
