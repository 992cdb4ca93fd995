//! Backend implementations for different SIMD instruction sets
//!
//! Each backend provides the batched element-wise add for `f32` and `f64`:
//! full vector registers first, then a scalar loop over the remainder.
//!
//! # Safety
//!
//! All `unsafe` code is isolated within backend implementations. The public API
//! remains 100% safe: the kernel validates lengths and backend availability
//! before calling into this module.
//!
//! # Backends
//!
//! - `scalar`: Portable baseline implementation (no SIMD)
//! - `sse2`: x86_64 baseline SIMD (128-bit)
//! - `avx`: x86_64 256-bit SIMD, used for both AVX and AVX2
//! - `avx512`: x86_64 512-bit SIMD
//! - `neon`: AArch64 SIMD (128-bit)
//! - `wasm`: WebAssembly SIMD128

use crate::Backend;

pub mod scalar;

#[cfg(target_arch = "x86_64")]
pub mod sse2;

#[cfg(target_arch = "x86_64")]
pub mod avx;

#[cfg(target_arch = "x86_64")]
pub mod avx512;

#[cfg(target_arch = "aarch64")]
pub mod neon;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

use scalar::ScalarBackend;

/// Backend trait defining the element-wise add
///
/// All backend implementations must implement this trait to ensure
/// consistent behavior across different SIMD instruction sets.
///
/// # Safety
///
/// Implementations may use unsafe SIMD intrinsics. Callers must ensure:
/// - Slices `a`, `b` and `result` have the same length
/// - The instruction set is available on the running CPU
pub trait VectorBackend {
    /// `f32` lanes per vector register
    const LANES_F32: usize;

    /// `f64` lanes per vector register
    const LANES_F64: usize;

    /// Element-wise addition: result[i] = a[i] + b[i]
    ///
    /// # Safety
    ///
    /// - `a`, `b` and `result` must have the same length
    unsafe fn add_f32(a: &[f32], b: &[f32], result: &mut [f32]);

    /// Element-wise addition: result[i] = a[i] + b[i]
    ///
    /// # Safety
    ///
    /// - `a`, `b` and `result` must have the same length
    unsafe fn add_f64(a: &[f64], b: &[f64], result: &mut [f64]);
}

/// Signature shared by every backend's add for element type `T`
pub(crate) type AddFn<T> = unsafe fn(&[T], &[T], &mut [T]);

/// Implementation of the `f32` add that `backend` runs on
///
/// `AVX` and `AVX2` share one implementation; `Auto` and backends not
/// compiled for this architecture land on the scalar loop.
pub(crate) fn f32_kernel(backend: Backend) -> AddFn<f32> {
    match backend {
        #[cfg(target_arch = "x86_64")]
        Backend::SSE2 => sse2::Sse2Backend::add_f32,
        #[cfg(target_arch = "x86_64")]
        Backend::AVX | Backend::AVX2 => avx::AvxBackend::add_f32,
        #[cfg(target_arch = "x86_64")]
        Backend::AVX512 => avx512::Avx512Backend::add_f32,
        #[cfg(target_arch = "aarch64")]
        Backend::NEON => neon::NeonBackend::add_f32,
        #[cfg(target_arch = "wasm32")]
        Backend::WasmSIMD => wasm::WasmBackend::add_f32,
        _ => ScalarBackend::add_f32,
    }
}

/// Implementation of the `f64` add that `backend` runs on
pub(crate) fn f64_kernel(backend: Backend) -> AddFn<f64> {
    match backend {
        #[cfg(target_arch = "x86_64")]
        Backend::SSE2 => sse2::Sse2Backend::add_f64,
        #[cfg(target_arch = "x86_64")]
        Backend::AVX | Backend::AVX2 => avx::AvxBackend::add_f64,
        #[cfg(target_arch = "x86_64")]
        Backend::AVX512 => avx512::Avx512Backend::add_f64,
        #[cfg(target_arch = "aarch64")]
        Backend::NEON => neon::NeonBackend::add_f64,
        #[cfg(target_arch = "wasm32")]
        Backend::WasmSIMD => wasm::WasmBackend::add_f64,
        _ => ScalarBackend::add_f64,
    }
}

/// Dispatch an `f32` add to the implementation for `backend`
///
/// # Safety
///
/// Same-length slices; `backend` resolved and available.
pub(crate) unsafe fn add_f32(backend: Backend, a: &[f32], b: &[f32], result: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), result.len());

    f32_kernel(backend)(a, b, result)
}

/// Dispatch an `f64` add to the implementation for `backend`
///
/// # Safety
///
/// Same-length slices; `backend` resolved and available.
pub(crate) unsafe fn add_f64(backend: Backend, a: &[f64], b: &[f64], result: &mut [f64]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), result.len());

    f64_kernel(backend)(a, b, result)
}
