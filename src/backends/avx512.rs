//! AVX-512 backend implementation (x86_64 512-bit SIMD)
//!
//! AVX-512 is available on Intel Skylake-X/Sapphire Rapids (2017+) and AMD Zen 4 (2022+) CPUs.
//!
//! # Performance
//!
//! 16 x f32 or 8 x f64 per register.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::VectorBackend;

/// AVX-512 backend (512-bit SIMD for x86_64)
pub struct Avx512Backend;

impl VectorBackend for Avx512Backend {
    const LANES_F32: usize = 16;
    const LANES_F64: usize = 8;

    #[target_feature(enable = "avx512f")]
    // SAFETY: Pointer arithmetic and SIMD intrinsics are safe because:
    // 1. Loop bounds ensure `i + 16 <= len` before calling `.add(i)`
    // 2. All pointers derived from valid slice references of length `len`
    // 3. Unaligned loads/stores used (_mm512_loadu_ps/_mm512_storeu_ps)
    unsafe fn add_f32(a: &[f32], b: &[f32], result: &mut [f32]) {
        let len = a.len();
        let mut i = 0;

        // Process 16 elements at a time (512-bit = 16 x f32)
        while i + 16 <= len {
            let va = _mm512_loadu_ps(a.as_ptr().add(i));
            let vb = _mm512_loadu_ps(b.as_ptr().add(i));
            _mm512_storeu_ps(result.as_mut_ptr().add(i), _mm512_add_ps(va, vb));
            i += 16;
        }

        for j in i..len {
            result[j] = a[j] + b[j];
        }
    }

    #[target_feature(enable = "avx512f")]
    // SAFETY: as `add_f32`, with 8 lanes per register
    unsafe fn add_f64(a: &[f64], b: &[f64], result: &mut [f64]) {
        let len = a.len();
        let mut i = 0;

        while i + 8 <= len {
            let va = _mm512_loadu_pd(a.as_ptr().add(i));
            let vb = _mm512_loadu_pd(b.as_ptr().add(i));
            _mm512_storeu_pd(result.as_mut_ptr().add(i), _mm512_add_pd(va, vb));
            i += 8;
        }

        for j in i..len {
            result[j] = a[j] + b[j];
        }
    }
}
