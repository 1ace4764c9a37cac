use thiserror::Error;

/// A pass ran against a grid with nothing painted on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("empty result: {reason}")]
pub struct EmptyResult {
    pub reason: String,
}

impl EmptyResult {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Rejected scalar configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidConfiguration {
    #[error("cell size must be a positive finite number, got {0}")]
    CellSize(f32),
    #[error("extrusion depth must be a positive finite number, got {0}")]
    ExtrusionDepth(f32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("buffer holds {actual} cells, expected {width}x{depth}={expected}")]
    LengthMismatch {
        width: usize,
        depth: usize,
        expected: usize,
        actual: usize,
    },
    #[error("grid {width}x{depth} is too large")]
    TooLarge { width: usize, depth: usize },
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
