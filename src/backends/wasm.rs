//! WebAssembly SIMD128 backend implementation
//!
//! SIMD128 is supported in modern browsers and wasm runtimes. WebAssembly has
//! no runtime feature detection, so this backend is selected only when the
//! crate is compiled with `-C target-feature=+simd128`.
//!
//! # Performance
//!
//! 4 x f32 or 2 x f64 per register.

#[cfg(target_arch = "wasm32")]
use std::arch::wasm32::*;

use super::VectorBackend;

/// WebAssembly SIMD128 backend (128-bit SIMD)
pub struct WasmBackend;

impl VectorBackend for WasmBackend {
    const LANES_F32: usize = 4;
    const LANES_F64: usize = 2;

    #[target_feature(enable = "simd128")]
    // SAFETY: Loop bounds ensure `i + 4 <= len`; v128_load/v128_store
    // tolerate unaligned addresses.
    unsafe fn add_f32(a: &[f32], b: &[f32], result: &mut [f32]) {
        let len = a.len();
        let mut i = 0;

        while i + 4 <= len {
            let va = v128_load(a.as_ptr().add(i) as *const v128);
            let vb = v128_load(b.as_ptr().add(i) as *const v128);
            v128_store(result.as_mut_ptr().add(i) as *mut v128, f32x4_add(va, vb));
            i += 4;
        }

        for j in i..len {
            result[j] = a[j] + b[j];
        }
    }

    #[target_feature(enable = "simd128")]
    // SAFETY: as `add_f32`, with 2 lanes per register
    unsafe fn add_f64(a: &[f64], b: &[f64], result: &mut [f64]) {
        let len = a.len();
        let mut i = 0;

        while i + 2 <= len {
            let va = v128_load(a.as_ptr().add(i) as *const v128);
            let vb = v128_load(b.as_ptr().add(i) as *const v128);
            v128_store(result.as_mut_ptr().add(i) as *mut v128, f64x2_add(va, vb));
            i += 2;
        }

        for j in i..len {
            result[j] = a[j] + b[j];
        }
    }
}

#[cfg(all(test, target_arch = "wasm32", target_feature = "simd128"))]
mod tests {
    use super::*;

    #[test]
    fn test_wasm_add_with_tail() {
        let a = vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = vec![6.0f32, 5.0, 4.0, 3.0, 2.0, 1.0];
        let mut result = vec![0.0f32; 6];

        unsafe {
            WasmBackend::add_f32(&a, &b, &mut result);
        }

        assert_eq!(result, vec![7.0; 6]);
    }
}
