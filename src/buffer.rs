//! Owned, fixed-length numeric buffers
//!
//! Every constructor initializes all elements, and storage is obtained with
//! [`Vec::try_reserve_exact`] so an allocation failure surfaces as
//! [`VaddError::AllocationFailure`] instead of aborting the process.

use std::ops::Index;

use crate::{Element, ElementType, Result, VaddError};

/// Contiguous owned sequence of `T`, fixed in length at creation
///
/// # Examples
///
/// ```
/// use vadd::NumericBuffer;
///
/// let buf = NumericBuffer::from_fn(4, |i| i as f32 * 0.5).unwrap();
/// assert_eq!(buf.as_slice(), &[0.0, 0.5, 1.0, 1.5]);
/// assert_eq!(buf.first(), Some(0.0));
/// assert_eq!(buf.last(), Some(1.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumericBuffer<T: Element> {
    data: Vec<T>,
}

/// Reserve exactly `len` slots or report the failure
fn try_with_capacity<T: Element>(len: usize) -> Result<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| VaddError::AllocationFailure {
            len,
            elem_size: T::TYPE.size_of(),
        })?;
    Ok(data)
}

impl<T: Element> NumericBuffer<T> {
    /// Buffer of `len` zeros
    ///
    /// # Errors
    ///
    /// Returns [`VaddError::AllocationFailure`] if storage cannot be reserved.
    pub fn zeroed(len: usize) -> Result<Self> {
        Self::filled(len, T::ZERO)
    }

    /// Buffer of `len` copies of `value`
    pub fn filled(len: usize, value: T) -> Result<Self> {
        let mut data = try_with_capacity(len)?;
        data.resize(len, value);
        Ok(Self { data })
    }

    /// Buffer whose element `i` is `f(i)`
    ///
    /// # Errors
    ///
    /// Returns [`VaddError::AllocationFailure`] if storage cannot be reserved.
    pub fn from_fn<F>(len: usize, f: F) -> Result<Self>
    where
        F: FnMut(usize) -> T,
    {
        let mut data = try_with_capacity(len)?;
        data.extend((0..len).map(f));
        Ok(Self { data })
    }

    /// Copy of `values`
    pub fn from_slice(values: &[T]) -> Result<Self> {
        let mut data = try_with_capacity(values.len())?;
        data.extend_from_slice(values);
        Ok(Self { data })
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element type tag
    pub fn element_type(&self) -> ElementType {
        T::TYPE
    }

    /// Element at `index`, if in bounds
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// First element
    pub fn first(&self) -> Option<T> {
        self.data.first().copied()
    }

    /// Last element
    pub fn last(&self) -> Option<T> {
        self.data.last().copied()
    }

    /// Underlying data as slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Underlying data as mutable slice; the length cannot change through it
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the buffer, returning its storage
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Element> From<Vec<T>> for NumericBuffer<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Element> AsRef<[T]> for NumericBuffer<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: Element> Index<usize> for NumericBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed() {
        let buf: NumericBuffer<f64> = NumericBuffer::zeroed(5).unwrap();
        assert_eq!(buf.len(), 5);
        assert!(buf.as_slice().iter().all(|&x| x == 0.0));
        assert_eq!(buf.element_type(), ElementType::F64);
    }

    #[test]
    fn test_zeroed_empty() {
        let buf: NumericBuffer<f32> = NumericBuffer::zeroed(0).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.first(), None);
        assert_eq!(buf.last(), None);
    }

    #[test]
    fn test_filled() {
        let buf = NumericBuffer::filled(3, 2.0f64).unwrap();
        assert_eq!(buf.as_slice(), &[2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_from_fn() {
        let buf = NumericBuffer::from_fn(4, |i| i as f32 * 2.0).unwrap();
        assert_eq!(buf.as_slice(), &[0.0, 2.0, 4.0, 6.0]);
        assert_eq!(buf[2], 4.0);
        assert_eq!(buf.get(3), Some(6.0));
        assert_eq!(buf.get(4), None);
    }

    #[test]
    fn test_from_slice_copies() {
        let src = [1.0f32, 2.0, 3.0];
        let buf = NumericBuffer::from_slice(&src).unwrap();
        assert_eq!(buf.as_slice(), &src);
        assert_eq!(buf.clone().into_vec(), src.to_vec());
    }

    #[test]
    fn test_allocation_failure_is_reported() {
        let result: Result<NumericBuffer<f64>> = NumericBuffer::zeroed(usize::MAX);
        assert_eq!(
            result.unwrap_err(),
            VaddError::AllocationFailure {
                len: usize::MAX,
                elem_size: 8,
            }
        );
    }

    #[test]
    fn test_allocation_failure_from_fn() {
        let result = NumericBuffer::from_fn(usize::MAX / 2, |i| i as f32);
        assert!(matches!(
            result,
            Err(VaddError::AllocationFailure { elem_size: 4, .. })
        ));
    }

    #[test]
    fn test_mut_slice_keeps_length() {
        let mut buf = NumericBuffer::zeroed(3).unwrap();
        buf.as_mut_slice()[1] = 7.0f32;
        assert_eq!(buf.as_slice(), &[0.0, 7.0, 0.0]);
        assert_eq!(buf.len(), 3);
    }
}
