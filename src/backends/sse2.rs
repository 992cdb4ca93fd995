//! SSE2 backend implementation (x86_64 baseline SIMD)
//!
//! This backend uses SSE2 intrinsics for 128-bit SIMD operations.
//! SSE2 is available on all x86_64 CPUs as a baseline requirement.
//!
//! # Performance
//!
//! 4 x f32 or 2 x f64 per register.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::VectorBackend;

/// SSE2 backend (128-bit SIMD for x86_64)
pub struct Sse2Backend;

impl VectorBackend for Sse2Backend {
    const LANES_F32: usize = 4;
    const LANES_F64: usize = 2;

    #[target_feature(enable = "sse2")]
    // SAFETY: Pointer arithmetic and SIMD intrinsics are safe because:
    // 1. Loop bounds ensure `i + 4 <= len` before calling `.add(i)`
    // 2. All pointers derived from valid slice references of length `len`
    // 3. Unaligned loads/stores used (_mm_loadu_ps/_mm_storeu_ps)
    unsafe fn add_f32(a: &[f32], b: &[f32], result: &mut [f32]) {
        let len = a.len();
        let mut i = 0;

        // Process 4 elements at a time using SSE2 (128-bit = 4 x f32)
        while i + 4 <= len {
            let va = _mm_loadu_ps(a.as_ptr().add(i));
            let vb = _mm_loadu_ps(b.as_ptr().add(i));
            _mm_storeu_ps(result.as_mut_ptr().add(i), _mm_add_ps(va, vb));
            i += 4;
        }

        // Handle remaining elements with scalar code
        for j in i..len {
            result[j] = a[j] + b[j];
        }
    }

    #[target_feature(enable = "sse2")]
    // SAFETY: as `add_f32`, with 2 lanes per register
    unsafe fn add_f64(a: &[f64], b: &[f64], result: &mut [f64]) {
        let len = a.len();
        let mut i = 0;

        while i + 2 <= len {
            let va = _mm_loadu_pd(a.as_ptr().add(i));
            let vb = _mm_loadu_pd(b.as_ptr().add(i));
            _mm_storeu_pd(result.as_mut_ptr().add(i), _mm_add_pd(va, vb));
            i += 2;
        }

        for j in i..len {
            result[j] = a[j] + b[j];
        }
    }
}

#[cfg(all(test, target_arch = "x86_64"))]
mod tests {
    use super::*;
    use crate::backends::scalar::ScalarBackend;

    #[test]
    fn test_sse2_add_basic() {
        let a = vec![1.0f32, 2.0, 3.0, 4.0];
        let b = vec![5.0f32, 6.0, 7.0, 8.0];
        let mut result = vec![0.0f32; 4];

        unsafe {
            Sse2Backend::add_f32(&a, &b, &mut result);
        }

        assert_eq!(result, vec![6.0, 8.0, 10.0, 12.0]);
    }

    #[test]
    fn test_sse2_add_f64_odd_length() {
        let a = vec![1.0f64, 2.0, 3.0];
        let b = vec![0.5f64, 0.5, 0.5];
        let mut result = vec![0.0f64; 3];

        unsafe {
            Sse2Backend::add_f64(&a, &b, &mut result);
        }

        assert_eq!(result, vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_sse2_add_remainder_correctness() {
        // Every remainder 0..4 past two full registers
        for size in 8..=12 {
            let a: Vec<f32> = (0..size).map(|i| i as f32 * 0.1).collect();
            let b: Vec<f32> = (0..size).map(|i| i as f32 * 0.2).collect();
            let mut simd = vec![0.0f32; size];
            let mut scalar = vec![0.0f32; size];

            unsafe {
                Sse2Backend::add_f32(&a, &b, &mut simd);
                ScalarBackend::add_f32(&a, &b, &mut scalar);
            }

            for i in 0..size {
                assert_eq!(
                    simd[i].to_bits(),
                    scalar[i].to_bits(),
                    "Mismatch at size {} index {}",
                    size,
                    i
                );
            }
        }
    }
}
