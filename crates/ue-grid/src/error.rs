use thiserror::Error;

use ue_core::Cell;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds {
        cell:   Cell,
        width:  u32,
        height: u32,
    },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("grid capacity must be positive, got {0}")]
    InvalidCapacity(i32),

    #[error("value {value} is outside [0, {capacity}]")]
    ValueOutOfRange { value: i32, capacity: i32 },

    #[error("expected {expected} cells, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
}

pub type GridResult<T> = Result<T, GridError>;
