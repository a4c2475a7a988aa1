//! Error types for the host export layer

use se_core::ArrayError;
use thiserror::Error;

/// Result type for export layer operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors reported back to the host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("negative memory request: {0} bytes")]
    NegativeSize(i32),

    #[error("invalid layout for a {0} byte buffer")]
    InvalidLayout(usize),

    #[error("out of memory allocating {0} bytes")]
    OutOfMemory(usize),

    #[error("pointer {0:#x} is not a live allocation")]
    UnknownAllocation(usize),

    #[error("object list: {0}")]
    Array(#[from] ArrayError),
}
