//! Static index partitioning and the worker pool that runs partitions
//!
//! The parallel strategy splits `0..len` into contiguous, disjoint ranges up
//! front, hands each range's output sub-slice to exactly one worker, and joins
//! before returning. Workers never share a writable element, so no locks or
//! atomics are involved.

use std::ops::Range;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::{Result, VaddError};

/// Split `0..len` into at most `parts` contiguous ranges of near-equal size
///
/// The first `len % parts` ranges are one element longer than the rest.
/// Returns no ranges for `len == 0`, and never an empty range.
///
/// # Examples
///
/// ```
/// use vadd::partition::partition;
///
/// assert_eq!(partition(10, 3), vec![0..4, 4..7, 7..10]);
/// assert_eq!(partition(2, 4), vec![0..1, 1..2]);
/// assert!(partition(0, 4).is_empty());
/// ```
pub fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.clamp(1, len.max(1));
    if len == 0 {
        return Vec::new();
    }

    let base = len / parts;
    let extra = len % parts;

    let mut ranges = Vec::with_capacity(parts);
    let mut start = 0;
    for p in 0..parts {
        let size = base + usize::from(p < extra);
        ranges.push(start..start + size);
        start += size;
    }
    debug_assert_eq!(start, len);
    ranges
}

/// Partitions to cut `len` elements into for `threads` workers
///
/// One per worker, but never so many that a partition drops below
/// `min_chunk_len`; always at least one.
///
/// # Examples
///
/// ```
/// use vadd::partition::partition_count;
///
/// assert_eq!(partition_count(1_000_000, 4, 1024), 4);
/// assert_eq!(partition_count(3_000, 8, 1024), 2);
/// assert_eq!(partition_count(10, 8, 1024), 1);
/// ```
pub fn partition_count(len: usize, threads: usize, min_chunk_len: usize) -> usize {
    let max_parts = len / min_chunk_len.max(1);
    threads.min(max_parts).max(1)
}

/// Number of worker threads to use when none is configured
pub fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Fixed-size pool of worker threads
pub struct WorkerPool {
    pool: ThreadPool,
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("threads", &self.threads())
            .finish()
    }
}

impl WorkerPool {
    /// Build a pool with exactly `threads` workers
    ///
    /// # Errors
    ///
    /// Returns [`VaddError::InvalidConfig`] for a zero thread count or when the
    /// operating system refuses to spawn the workers.
    pub fn new(threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(VaddError::InvalidConfig(
                "thread count must be non-zero".to_string(),
            ));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("vadd-worker-{i}"))
            .build()
            .map_err(|e| VaddError::InvalidConfig(format!("worker pool: {e}")))?;

        Ok(Self { pool })
    }

    /// Number of worker threads
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `op` over `parts` contiguous partitions and wait for all of them
    ///
    /// `op` receives matching sub-slices of `a`, `b` and `out`, one partition
    /// per pool task. Returns the number of partitions actually run, which
    /// is smaller than `parts` only when there are fewer elements.
    ///
    /// # Panics
    ///
    /// Panics if the three slices differ in length; callers validate first.
    pub fn run_partitioned<T, F>(
        &self,
        a: &[T],
        b: &[T],
        out: &mut [T],
        parts: usize,
        op: F,
    ) -> usize
    where
        T: Send + Sync,
        F: Fn(&[T], &[T], &mut [T]) + Sync,
    {
        assert_eq!(a.len(), b.len());
        assert_eq!(a.len(), out.len());

        let len = out.len();
        let ranges = partition(len, parts);
        let spawned = ranges.len();

        #[cfg(feature = "tracing")]
        tracing::debug!(len, partitions = spawned, "running partitioned add");

        let op = &op;
        self.pool.scope(|scope| {
            let mut rest = out;
            for range in ranges {
                let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
                rest = tail;
                let (chunk_a, chunk_b) = (&a[range.clone()], &b[range]);
                scope.spawn(move |_| op(chunk_a, chunk_b, chunk));
            }
        });
        spawned
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        // Ranges tile 0..len in order with no gaps, overlaps or empties
        #[test]
        fn test_partition_tiles_range(len in 0usize..10_000, parts in 0usize..64) {
            let ranges = partition(len, parts);

            let mut next = 0;
            for r in &ranges {
                prop_assert_eq!(r.start, next);
                prop_assert!(!r.is_empty());
                next = r.end;
            }
            prop_assert_eq!(next, len);
            prop_assert!(ranges.len() <= parts.max(1));
        }

        // Sizes differ by at most one element
        #[test]
        fn test_partition_balanced(len in 1usize..10_000, parts in 1usize..64) {
            let ranges = partition(len, parts);
            let min = ranges.iter().map(|r| r.len()).min().unwrap();
            let max = ranges.iter().map(|r| r.len()).max().unwrap();
            prop_assert!(max - min <= 1);
        }
    }
}
