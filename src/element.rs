//! Numeric element types accepted by the kernel

use std::fmt::{self, Debug};
use std::ops::Add;

use crate::backends;
use crate::Backend;

/// Runtime tag for an element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// 32-bit IEEE float
    F32,
    /// 64-bit IEEE float
    F64,
}

impl ElementType {
    /// Size of one element in bytes
    pub const fn size_of(self) -> usize {
        match self {
            ElementType::F32 => std::mem::size_of::<f32>(),
            ElementType::F64 => std::mem::size_of::<f64>(),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::F32 => write!(f, "f32"),
            ElementType::F64 => write!(f, "f64"),
        }
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point element that the kernel can add
///
/// Sealed: implemented for `f32` and `f64` only, since every backend
/// carries a hand-written path for each.
pub trait Element:
    Copy + Debug + PartialEq + Add<Output = Self> + Send + Sync + sealed::Sealed + 'static
{
    /// Additive identity, used to initialize fresh buffers
    const ZERO: Self;

    /// Runtime tag of this type
    const TYPE: ElementType;

    /// Add `a` and `b` into `out` using `backend`'s batched kernel
    ///
    /// # Safety
    ///
    /// - `a`, `b` and `out` must have the same length
    /// - `backend` must be resolved (not `Auto`) and available on this CPU
    unsafe fn add_with(backend: Backend, a: &[Self], b: &[Self], out: &mut [Self]);
}

impl Element for f32 {
    const ZERO: Self = 0.0;
    const TYPE: ElementType = ElementType::F32;

    unsafe fn add_with(backend: Backend, a: &[Self], b: &[Self], out: &mut [Self]) {
        backends::add_f32(backend, a, b, out);
    }
}

impl Element for f64 {
    const ZERO: Self = 0.0;
    const TYPE: ElementType = ElementType::F64;

    unsafe fn add_with(backend: Backend, a: &[Self], b: &[Self], out: &mut [Self]) {
        backends::add_f64(backend, a, b, out);
    }
}
