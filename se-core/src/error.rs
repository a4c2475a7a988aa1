//! Error types for the core containers and matrices

use thiserror::Error;

/// Result type for growable array operations
pub type ArrayResult<T> = Result<T, ArrayError>;

/// Errors that can occur while indexing or growing a `GrowableArray`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    #[error("failed to allocate backing storage for {requested} elements")]
    AllocationFailed { requested: usize },

    #[error("capacity overflow while growing from {capacity}")]
    CapacityOverflow { capacity: usize },

    #[error("Invalid array position: {0}")]
    NegativeIndex(i32),

    #[error("index {index} is beyond a single growth step (capacity {capacity})")]
    BeyondGrowth { index: usize, capacity: usize },
}

/// Errors raised when building a `Mat4` from raw data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("expected 16 matrix components, got {0}")]
    Length(usize),
}
