//! Kernel configuration
//!
//! # Examples
//!
//! ```
//! use vadd::{Backend, ExecutionStrategy, KernelConfig};
//!
//! // Presets for the three strategies
//! let simd = KernelConfig::simd();
//! assert_eq!(simd.strategy, ExecutionStrategy::SimdBatched);
//!
//! // Custom configuration using builder pattern
//! let custom = KernelConfig::new()
//!     .with_strategy(ExecutionStrategy::Parallel)
//!     .with_backend(Backend::Scalar)
//!     .with_threads(4)
//!     .with_min_parallel_len(0)
//!     .build();
//! assert_eq!(custom.threads, Some(4));
//! ```

use crate::{Backend, ExecutionStrategy};

/// Inputs shorter than this run on the calling thread under the parallel strategy
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 4096;

/// Smallest partition handed to a worker
pub const DEFAULT_MIN_CHUNK_LEN: usize = 1024;

/// How a [`VectorAddKernel`](crate::VectorAddKernel) executes
///
/// Validation happens in `VectorAddKernel::new`, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelConfig {
    /// Loop realization
    pub strategy: ExecutionStrategy,
    /// SIMD backend for batched adds (`Auto` = detect at kernel build)
    pub backend: Backend,
    /// Worker count for the parallel strategy (`None` = hardware parallelism)
    pub threads: Option<usize>,
    /// Inputs shorter than this are not split across workers
    pub min_parallel_len: usize,
    /// Lower bound on partition length
    pub min_chunk_len: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            strategy: ExecutionStrategy::Scalar,
            backend: Backend::Auto,
            threads: None,
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
            min_chunk_len: DEFAULT_MIN_CHUNK_LEN,
        }
    }
}

impl KernelConfig {
    /// Create a configuration with default values (scalar strategy)
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset: sequential scalar loop
    pub fn scalar() -> Self {
        Self::new().with_strategy(ExecutionStrategy::Scalar)
    }

    /// Preset: partitioned across all hardware threads
    pub fn parallel() -> Self {
        Self::new().with_strategy(ExecutionStrategy::Parallel)
    }

    /// Preset: SIMD batches on the best detected backend
    pub fn simd() -> Self {
        Self::new().with_strategy(ExecutionStrategy::SimdBatched)
    }

    /// Set the execution strategy
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the SIMD backend
    ///
    /// Under the parallel strategy each worker runs this backend on its partition.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Set the worker count for the parallel strategy
    ///
    /// # Examples
    ///
    /// ```
    /// use vadd::KernelConfig;
    ///
    /// let config = KernelConfig::parallel().with_threads(2);
    /// assert_eq!(config.threads, Some(2));
    /// ```
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Set the length below which the parallel strategy stays on the calling thread
    pub fn with_min_parallel_len(mut self, len: usize) -> Self {
        self.min_parallel_len = len;
        self
    }

    /// Set the minimum partition length
    ///
    /// Zero is treated as one.
    pub fn with_min_chunk_len(mut self, len: usize) -> Self {
        self.min_chunk_len = len.max(1);
        self
    }

    /// Finalize configuration (for builder pattern chaining)
    pub fn build(self) -> Self {
        self
    }
}
