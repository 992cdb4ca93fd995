//! AVX backend implementation (x86_64 256-bit SIMD)
//!
//! The 256-bit floating-point add (`vaddps`/`vaddpd`) is an AVX instruction,
//! so this one backend serves both `Backend::AVX` and `Backend::AVX2`.
//! AVX is available on Intel Sandy Bridge (2011+) and AMD Bulldozer (2011+) CPUs.
//!
//! # Performance
//!
//! 8 x f32 or 4 x f64 per register; the 8-wide `f32` batch matches the
//! classic `_mm256_add_ps` example exactly.
//!
//! # Safety
//!
//! All AVX intrinsics are marked `unsafe` by Rust. Callers must have confirmed
//! `avx` support at runtime (`Backend::is_available`).

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::VectorBackend;

/// AVX backend (256-bit SIMD for x86_64)
pub struct AvxBackend;

impl VectorBackend for AvxBackend {
    const LANES_F32: usize = 8;
    const LANES_F64: usize = 4;

    #[target_feature(enable = "avx")]
    // SAFETY: Pointer arithmetic and SIMD intrinsics are safe because:
    // 1. Loop bounds ensure `i + 8 <= len` before calling `.add(i)`
    // 2. All pointers derived from valid slice references of length `len`
    // 3. Unaligned loads/stores used (_mm256_loadu_ps/_mm256_storeu_ps) - no alignment requirement
    unsafe fn add_f32(a: &[f32], b: &[f32], result: &mut [f32]) {
        let len = a.len();
        let mut i = 0;

        // Process 8 elements at a time (256-bit = 8 x f32)
        while i + 8 <= len {
            let va = _mm256_loadu_ps(a.as_ptr().add(i));
            let vb = _mm256_loadu_ps(b.as_ptr().add(i));

            let vresult = _mm256_add_ps(va, vb);

            _mm256_storeu_ps(result.as_mut_ptr().add(i), vresult);

            i += 8;
        }

        // Handle remaining elements with scalar code
        for j in i..len {
            result[j] = a[j] + b[j];
        }
    }

    #[target_feature(enable = "avx")]
    // SAFETY: as `add_f32`, with 4 lanes per register
    unsafe fn add_f64(a: &[f64], b: &[f64], result: &mut [f64]) {
        let len = a.len();
        let mut i = 0;

        while i + 4 <= len {
            let va = _mm256_loadu_pd(a.as_ptr().add(i));
            let vb = _mm256_loadu_pd(b.as_ptr().add(i));
            _mm256_storeu_pd(result.as_mut_ptr().add(i), _mm256_add_pd(va, vb));
            i += 4;
        }

        for j in i..len {
            result[j] = a[j] + b[j];
        }
    }
}
