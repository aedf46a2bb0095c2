use thiserror::Error;

pub type DimensionResult<T> = Result<T, DimensionError>;

#[derive(Debug, Error)]
pub enum DimensionError {
    #[error("invalid scale bounds: start={start}, end={end}")]
    InvalidBounds { start: f64, end: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
