//! Error types for vadd operations

use thiserror::Error;

use crate::Backend;

/// Result type for vadd operations
pub type Result<T> = std::result::Result<T, VaddError>;

/// Errors that can occur while building buffers or running the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VaddError {
    /// Operand lengths differ
    #[error("Invalid argument: length mismatch (expected {expected}, got {actual})")]
    InvalidArgument {
        /// Length of the left-hand operand
        expected: usize,
        /// Length of the offending operand
        actual: usize,
    },

    /// Buffer storage could not be allocated
    #[error("Allocation failure: cannot allocate {len} elements of {elem_size} bytes")]
    AllocationFailure {
        /// Requested element count
        len: usize,
        /// Size of one element in bytes
        elem_size: usize,
    },

    /// Requested SIMD backend cannot run on this CPU
    #[error("Backend not supported on this platform: {0:?}")]
    UnsupportedBackend(Backend),

    /// Kernel configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
