//! Scalar (non-SIMD) backend implementation
//!
//! This is the portable baseline implementation that works on all platforms.
//! It uses simple loops without any SIMD instructions, and is the reference
//! every other backend is checked against.

use super::VectorBackend;

/// Scalar backend (portable, no SIMD)
pub struct ScalarBackend;

impl ScalarBackend {
    /// Index-ordered add over any element type
    #[inline]
    pub fn add<T>(a: &[T], b: &[T], result: &mut [T])
    where
        T: Copy + std::ops::Add<Output = T>,
    {
        for ((r, &x), &y) in result.iter_mut().zip(a).zip(b) {
            *r = x + y;
        }
    }
}

impl VectorBackend for ScalarBackend {
    const LANES_F32: usize = 1;
    const LANES_F64: usize = 1;

    // SAFETY: This function is safe because:
    // 1. Iteration is bounded by the zipped slice lengths
    // 2. No raw pointer arithmetic is performed
    // 3. Marked unsafe only to match VectorBackend trait interface
    unsafe fn add_f32(a: &[f32], b: &[f32], result: &mut [f32]) {
        Self::add(a, b, result);
    }

    // SAFETY: see `add_f32`
    unsafe fn add_f64(a: &[f64], b: &[f64], result: &mut [f64]) {
        Self::add(a, b, result);
    }
}
