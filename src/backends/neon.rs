//! ARM NEON backend implementation (AArch64 128-bit SIMD)
//!
//! # Performance
//!
//! 4 x f32 or 2 x f64 per register, similar to SSE2 on x86_64.
//! `f64` lanes require AArch64; 32-bit ARM is served by the scalar backend.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use super::VectorBackend;

/// ARM NEON backend (128-bit SIMD)
pub struct NeonBackend;

impl VectorBackend for NeonBackend {
    const LANES_F32: usize = 4;
    const LANES_F64: usize = 2;

    #[target_feature(enable = "neon")]
    // SAFETY: Loop bounds ensure `i + 4 <= len` before each pointer offset;
    // pointers come from slices of length `len`.
    unsafe fn add_f32(a: &[f32], b: &[f32], result: &mut [f32]) {
        let len = a.len();
        let mut i = 0;

        // Process 4 elements at a time using NEON (128-bit = 4 x f32)
        while i + 4 <= len {
            let va = vld1q_f32(a.as_ptr().add(i));
            let vb = vld1q_f32(b.as_ptr().add(i));
            vst1q_f32(result.as_mut_ptr().add(i), vaddq_f32(va, vb));
            i += 4;
        }

        // Handle remaining elements with scalar code
        for j in i..len {
            result[j] = a[j] + b[j];
        }
    }

    #[target_feature(enable = "neon")]
    // SAFETY: as `add_f32`, with 2 lanes per register
    unsafe fn add_f64(a: &[f64], b: &[f64], result: &mut [f64]) {
        let len = a.len();
        let mut i = 0;

        while i + 2 <= len {
            let va = vld1q_f64(a.as_ptr().add(i));
            let vb = vld1q_f64(b.as_ptr().add(i));
            vst1q_f64(result.as_mut_ptr().add(i), vaddq_f64(va, vb));
            i += 2;
        }

        for j in i..len {
            result[j] = a[j] + b[j];
        }
    }
}
