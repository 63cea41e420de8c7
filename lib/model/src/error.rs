use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Unknown model strategy: {0}")]
    UnknownStrategy(String),

    #[error("Training set is empty")]
    EmptyTrainingSet,

    #[error("Feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Target length {targets} does not match row count {rows}")]
    TargetLength { rows: usize, targets: usize },

    #[error("Design matrix is singular")]
    SingularMatrix,
}
