//! The element-wise vector addition kernel

use crate::backends::scalar::ScalarBackend;
use crate::partition::{default_threads, partition_count, WorkerPool};
use crate::{
    Backend, Element, ElementType, ExecutionStrategy, KernelConfig, NumericBuffer, Result,
    VaddError,
};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Element-wise adder with a fixed execution strategy
///
/// Built once from a [`KernelConfig`]; the backend is resolved and checked
/// against the running CPU, and the worker pool (parallel strategy only) is
/// started at construction. A kernel may be reused for any number of calls.
///
/// # Examples
///
/// ```
/// use vadd::{NumericBuffer, VectorAddKernel};
///
/// let a = NumericBuffer::filled(10_000, 1.0f64).unwrap();
/// let b = NumericBuffer::filled(10_000, 2.0f64).unwrap();
///
/// let kernel = VectorAddKernel::parallel().unwrap();
/// let c = kernel.add(&a, &b).unwrap();
/// assert_eq!(c.first(), Some(3.0));
/// assert_eq!(c.last(), Some(3.0));
/// ```
#[derive(Debug)]
pub struct VectorAddKernel {
    strategy: ExecutionStrategy,
    backend: Backend,
    pool: Option<WorkerPool>,
    min_parallel_len: usize,
    min_chunk_len: usize,
}

/// Reject operands whose length differs from `expected`
fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(VaddError::InvalidArgument { expected, actual });
    }
    Ok(())
}

impl VectorAddKernel {
    /// Build a kernel from `config`
    ///
    /// # Errors
    ///
    /// - [`VaddError::UnsupportedBackend`] if the SIMD or parallel strategy is
    ///   asked to run a backend this CPU lacks
    /// - [`VaddError::InvalidConfig`] if the parallel strategy gets zero
    ///   threads or its pool cannot start
    pub fn new(config: KernelConfig) -> Result<Self> {
        let backend = match config.strategy {
            ExecutionStrategy::Scalar => Backend::Scalar,
            ExecutionStrategy::Parallel | ExecutionStrategy::SimdBatched => {
                let resolved = config.backend.resolve();
                if !resolved.is_available() {
                    return Err(VaddError::UnsupportedBackend(config.backend));
                }
                resolved
            }
        };

        let pool = match config.strategy {
            ExecutionStrategy::Parallel => {
                let threads = config.threads.unwrap_or_else(default_threads);
                Some(WorkerPool::new(threads)?)
            }
            ExecutionStrategy::Scalar | ExecutionStrategy::SimdBatched => None,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            strategy = %config.strategy,
            backend = ?backend,
            threads = pool.as_ref().map_or(1, WorkerPool::threads),
            "vector add kernel ready"
        );

        Ok(Self {
            strategy: config.strategy,
            backend,
            pool,
            min_parallel_len: config.min_parallel_len,
            min_chunk_len: config.min_chunk_len.max(1),
        })
    }

    /// Sequential scalar kernel
    pub fn scalar() -> Result<Self> {
        Self::new(KernelConfig::scalar())
    }

    /// Parallel kernel over all hardware threads
    pub fn parallel() -> Result<Self> {
        Self::new(KernelConfig::parallel())
    }

    /// SIMD kernel on the best detected backend
    pub fn simd() -> Result<Self> {
        Self::new(KernelConfig::simd())
    }

    /// Execution strategy
    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Resolved backend (`Scalar` for the scalar strategy)
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Worker threads used per call (1 unless parallel)
    pub fn threads(&self) -> usize {
        self.pool.as_ref().map_or(1, WorkerPool::threads)
    }

    /// Partitions a call over `len` elements is split into
    ///
    /// Always 1 unless the strategy is parallel and `len` reaches the
    /// configured minimum; otherwise one per worker, bounded by the minimum
    /// partition length.
    pub fn partition_count(&self, len: usize) -> usize {
        match &self.pool {
            Some(pool) if len >= self.min_parallel_len => {
                partition_count(len, pool.threads(), self.min_chunk_len)
            }
            _ => 1,
        }
    }

    /// Elements per vector add for `element` (1 when no SIMD is used)
    pub fn batch_width(&self, element: ElementType) -> usize {
        self.backend.batch_width(element)
    }

    /// Element-wise sum into a new buffer
    ///
    /// # Errors
    ///
    /// - [`VaddError::InvalidArgument`] if `a` and `b` differ in length
    /// - [`VaddError::AllocationFailure`] if the result cannot be allocated
    #[cfg_attr(
        feature = "tracing",
        instrument(skip_all, fields(len = a.len(), strategy = %self.strategy))
    )]
    pub fn add<T: Element>(
        &self,
        a: &NumericBuffer<T>,
        b: &NumericBuffer<T>,
    ) -> Result<NumericBuffer<T>> {
        check_len(a.len(), b.len())?;

        let mut out = NumericBuffer::zeroed(a.len())?;
        self.run(a.as_slice(), b.as_slice(), out.as_mut_slice());
        Ok(out)
    }

    /// Element-wise sum into a caller-owned buffer
    ///
    /// # Errors
    ///
    /// Returns [`VaddError::InvalidArgument`] if `b` or `out` differs in length
    /// from `a`; `out` is left untouched in that case.
    #[cfg_attr(
        feature = "tracing",
        instrument(skip_all, fields(len = a.len(), strategy = %self.strategy))
    )]
    pub fn add_into<T: Element>(
        &self,
        a: &NumericBuffer<T>,
        b: &NumericBuffer<T>,
        out: &mut NumericBuffer<T>,
    ) -> Result<()> {
        self.add_slices(a.as_slice(), b.as_slice(), out.as_mut_slice())
    }

    /// Element-wise sum over borrowed slices
    ///
    /// # Examples
    ///
    /// ```
    /// use vadd::VectorAddKernel;
    ///
    /// let kernel = VectorAddKernel::scalar().unwrap();
    /// let mut out = [0.0f32; 3];
    /// kernel.add_slices(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0], &mut out).unwrap();
    /// assert_eq!(out, [4.0, 4.0, 4.0]);
    /// ```
    pub fn add_slices<T: Element>(&self, a: &[T], b: &[T], out: &mut [T]) -> Result<()> {
        check_len(a.len(), b.len())?;
        check_len(a.len(), out.len())?;

        self.run(a, b, out);
        Ok(())
    }

    /// Returns the number of partitions the work ran as
    fn run<T: Element>(&self, a: &[T], b: &[T], out: &mut [T]) -> usize {
        let backend = self.backend;
        let parts = self.partition_count(out.len());

        match (self.strategy, &self.pool) {
            (ExecutionStrategy::Scalar, _) => {
                ScalarBackend::add(a, b, out);
                1
            }
            (ExecutionStrategy::Parallel, Some(pool)) if parts > 1 => {
                pool.run_partitioned(a, b, out, parts, |x, y, r| {
                    // SAFETY: partitions are equal-length sub-slices and the
                    // backend was checked in `new`.
                    unsafe { T::add_with(backend, x, y, r) }
                })
            }
            (ExecutionStrategy::Parallel | ExecutionStrategy::SimdBatched, _) => {
                // SAFETY: lengths checked by the caller, backend checked in `new`.
                unsafe { T::add_with(backend, a, b, out) };
                1
            }
        }
    }
}
