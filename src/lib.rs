//! vadd: Element-wise Vector Addition Kernel
//!
//! **vadd** adds two equal-length numeric buffers element by element, using one of
//! three interchangeable execution strategies:
//!
//! 1. **Scalar** - one sequential loop, the reference implementation
//! 2. **Parallel** - contiguous partitions processed on a fixed worker pool, then joined
//! 3. **SimdBatched** - fixed-width vector adds (SSE2/AVX/AVX2/AVX-512, NEON, WASM SIMD128)
//!    followed by a scalar tail for the remainder
//!
//! Every strategy produces bit-identical results: each output element is a single
//! independent IEEE addition, so there is no accumulation order to vary.
//!
//! # Design Principles
//!
//! - **Runtime dispatch**: SIMD backend selected from detected CPU features
//! - **Zero unsafe in public API**: `unsafe` isolated in `backends`
//! - **No partial writes**: operands are validated before anything is written
//! - **Fallible allocation**: buffer construction reports [`VaddError::AllocationFailure`]
//!
//! # Quick Start
//!
//! ```rust
//! use vadd::{NumericBuffer, VectorAddKernel};
//!
//! let a = NumericBuffer::from_slice(&[1.0f32, 2.0, 3.0, 4.0]).unwrap();
//! let b = NumericBuffer::from_slice(&[5.0f32, 6.0, 7.0, 8.0]).unwrap();
//!
//! let kernel = VectorAddKernel::simd().unwrap();
//! let result = kernel.add(&a, &b).unwrap();
//! assert_eq!(result.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
//! ```

pub mod backends;
pub mod buffer;
pub mod config;
pub mod element;
pub mod error;
pub mod kernel;
#[cfg(feature = "tracing")]
pub mod logging;
pub mod partition;
pub mod scenarios;

use std::fmt;

pub use buffer::NumericBuffer;
pub use config::KernelConfig;
pub use element::{Element, ElementType};
pub use error::{Result, VaddError};
pub use kernel::VectorAddKernel;

/// How the addition loop is realized
///
/// Selects a code path only; the numeric result is identical for all strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionStrategy {
    /// Single-threaded, index order `0..len`
    #[default]
    Scalar,
    /// Contiguous partitions on a fixed worker pool, joined before returning
    Parallel,
    /// Fixed-width SIMD batches plus a scalar remainder loop
    SimdBatched,
}

impl fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionStrategy::Scalar => write!(f, "scalar"),
            ExecutionStrategy::Parallel => write!(f, "parallel"),
            ExecutionStrategy::SimdBatched => write!(f, "simd-batched"),
        }
    }
}

/// SIMD execution target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Scalar fallback (no SIMD)
    Scalar,
    /// SSE2 (x86_64 baseline, 128-bit)
    SSE2,
    /// AVX (256-bit)
    AVX,
    /// AVX2 (256-bit)
    AVX2,
    /// AVX-512 (512-bit)
    AVX512,
    /// ARM NEON (128-bit)
    NEON,
    /// WebAssembly SIMD128
    WasmSIMD,
    /// Auto-select best available
    Auto,
}

impl Backend {
    /// Replace `Auto` with the detected backend; other values pass through
    pub fn resolve(self) -> Self {
        match self {
            Backend::Auto => select_best_available_backend(),
            other => other,
        }
    }

    /// Vector register width in bits (0 for scalar)
    pub fn register_bits(self) -> usize {
        match self.resolve() {
            Backend::Scalar | Backend::Auto => 0,
            Backend::SSE2 | Backend::NEON | Backend::WasmSIMD => 128,
            Backend::AVX | Backend::AVX2 => 256,
            Backend::AVX512 => 512,
        }
    }

    /// Number of elements handled by one vector add (1 for scalar)
    ///
    /// # Examples
    ///
    /// ```
    /// use vadd::{Backend, ElementType};
    ///
    /// assert_eq!(Backend::AVX2.batch_width(ElementType::F32), 8);
    /// assert_eq!(Backend::AVX2.batch_width(ElementType::F64), 4);
    /// assert_eq!(Backend::Scalar.batch_width(ElementType::F32), 1);
    /// ```
    pub fn batch_width(self, element: ElementType) -> usize {
        match self.register_bits() {
            0 => 1,
            bits => bits / 8 / element.size_of(),
        }
    }

    /// Whether this backend's instructions may be executed on the running CPU
    ///
    /// `Scalar` and `Auto` are always available.
    pub fn is_available(self) -> bool {
        match self {
            Backend::Scalar | Backend::Auto => true,
            #[cfg(target_arch = "x86_64")]
            Backend::SSE2 => is_x86_feature_detected!("sse2"),
            #[cfg(target_arch = "x86_64")]
            Backend::AVX => is_x86_feature_detected!("avx"),
            #[cfg(target_arch = "x86_64")]
            Backend::AVX2 => is_x86_feature_detected!("avx") && is_x86_feature_detected!("avx2"),
            #[cfg(target_arch = "x86_64")]
            Backend::AVX512 => is_x86_feature_detected!("avx512f"),
            #[cfg(not(target_arch = "x86_64"))]
            Backend::SSE2 | Backend::AVX | Backend::AVX2 | Backend::AVX512 => false,
            #[cfg(target_arch = "aarch64")]
            Backend::NEON => std::arch::is_aarch64_feature_detected!("neon"),
            #[cfg(not(target_arch = "aarch64"))]
            Backend::NEON => false,
            Backend::WasmSIMD => cfg!(all(target_arch = "wasm32", target_feature = "simd128")),
        }
    }
}

/// Detect best SIMD backend for x86_64
#[cfg(target_arch = "x86_64")]
fn detect_x86_backend() -> Backend {
    if is_x86_feature_detected!("avx512f") {
        return Backend::AVX512;
    }
    if is_x86_feature_detected!("avx2") {
        return Backend::AVX2;
    }
    if is_x86_feature_detected!("avx") {
        return Backend::AVX;
    }
    if is_x86_feature_detected!("sse2") {
        return Backend::SSE2;
    }
    Backend::Scalar
}

/// Detect best SIMD backend for AArch64
#[cfg(target_arch = "aarch64")]
fn detect_arm_backend() -> Backend {
    if std::arch::is_aarch64_feature_detected!("neon") {
        Backend::NEON
    } else {
        Backend::Scalar
    }
}

/// Detect best SIMD backend for WebAssembly
#[cfg(target_arch = "wasm32")]
fn detect_wasm_backend() -> Backend {
    #[cfg(target_feature = "simd128")]
    {
        Backend::WasmSIMD
    }
    #[cfg(not(target_feature = "simd128"))]
    {
        Backend::Scalar
    }
}

/// Select the best available backend for the current platform
///
/// Performs runtime CPU feature detection. Priority:
///
/// **x86_64**:
/// 1. AVX-512 (if `avx512f` detected)
/// 2. AVX2
/// 3. AVX
/// 4. SSE2 (baseline for x86_64)
/// 5. Scalar
///
/// **AArch64**: NEON, else Scalar
///
/// **WASM**: SIMD128 (if compiled with `simd128`), else Scalar
///
/// **Other platforms**: Scalar
///
/// # Examples
///
/// ```
/// use vadd::select_best_available_backend;
///
/// let backend = select_best_available_backend();
/// assert!(backend.is_available());
/// ```
pub fn select_best_available_backend() -> Backend {
    #[cfg(target_arch = "x86_64")]
    {
        detect_x86_backend()
    }

    #[cfg(target_arch = "aarch64")]
    {
        detect_arm_backend()
    }

    #[cfg(target_arch = "wasm32")]
    {
        detect_wasm_backend()
    }

    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "wasm32"
    )))]
    {
        Backend::Scalar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_enum() {
        assert_eq!(Backend::Scalar, Backend::Scalar);
        assert_ne!(Backend::Scalar, Backend::AVX2);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(ExecutionStrategy::Scalar.to_string(), "scalar");
        assert_eq!(ExecutionStrategy::Parallel.to_string(), "parallel");
        assert_eq!(ExecutionStrategy::SimdBatched.to_string(), "simd-batched");
        assert_eq!(ExecutionStrategy::default(), ExecutionStrategy::Scalar);
    }

    #[test]
    fn test_select_best_available_backend() {
        let backend = select_best_available_backend();
        assert!(backend.is_available());
        assert_ne!(backend, Backend::Auto);

        // x86_64 baseline is SSE2, so we should never get Scalar on x86_64
        #[cfg(target_arch = "x86_64")]
        {
            assert!(matches!(
                backend,
                Backend::SSE2 | Backend::AVX | Backend::AVX2 | Backend::AVX512
            ));
        }
    }

    #[test]
    fn test_backend_selection_is_deterministic() {
        let backend1 = select_best_available_backend();
        let backend2 = select_best_available_backend();
        assert_eq!(backend1, backend2);
    }

    #[test]
    fn test_resolve_auto() {
        assert_eq!(Backend::Auto.resolve(), select_best_available_backend());
        assert_eq!(Backend::Scalar.resolve(), Backend::Scalar);
        assert_eq!(Backend::NEON.resolve(), Backend::NEON);
    }

    #[test]
    fn test_batch_width() {
        assert_eq!(Backend::Scalar.batch_width(ElementType::F32), 1);
        assert_eq!(Backend::Scalar.batch_width(ElementType::F64), 1);
        assert_eq!(Backend::SSE2.batch_width(ElementType::F32), 4);
        assert_eq!(Backend::SSE2.batch_width(ElementType::F64), 2);
        assert_eq!(Backend::AVX.batch_width(ElementType::F32), 8);
        assert_eq!(Backend::AVX2.batch_width(ElementType::F64), 4);
        assert_eq!(Backend::AVX512.batch_width(ElementType::F32), 16);
        assert_eq!(Backend::AVX512.batch_width(ElementType::F64), 8);
        assert_eq!(Backend::NEON.batch_width(ElementType::F32), 4);
        assert_eq!(Backend::WasmSIMD.batch_width(ElementType::F64), 2);
    }

    #[test]
    fn test_scalar_always_available() {
        assert!(Backend::Scalar.is_available());
        assert!(Backend::Auto.is_available());
    }

    #[test]
    #[cfg(not(target_arch = "x86_64"))]
    fn test_x86_backends_unavailable_elsewhere() {
        assert!(!Backend::SSE2.is_available());
        assert!(!Backend::AVX512.is_available());
    }

    #[test]
    #[cfg(not(target_arch = "aarch64"))]
    fn test_neon_unavailable_elsewhere() {
        assert!(!Backend::NEON.is_available());
    }
}
