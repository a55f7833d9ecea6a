use thiserror::Error;

/// Top-level error type for the Cuneus wedge reconstruction pipeline.
#[derive(Debug, Error)]
pub enum CuneusError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised when an input path violates the data model.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("path {id} has no points")]
    EmptyPath { id: String },

    #[error("path {id} has a non-finite coordinate")]
    NonFinite { id: String },
}

/// Errors related to operation parameters.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`CuneusError`].
pub type Result<T> = std::result::Result<T, CuneusError>;
