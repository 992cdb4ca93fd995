//! The three fixed workloads behind the `vector_sum`, `vector_add_parallel`
//! and `vector_add_simd` executables
//!
//! Each scenario builds its inputs with a deterministic generator, runs one
//! kernel call, and formats the sample output its executable prints.

use crate::{KernelConfig, NumericBuffer, Result, VectorAddKernel};

/// Element count of the two large scenarios
pub const LARGE_LEN: usize = 1_000_000;

/// Element count of the fixed SIMD scenario (one 256-bit register of `f32`)
pub const SIMD_LEN: usize = 8;

/// Inputs `a[i] = i * 0.1`, `b[i] = i * 0.2`
///
/// Products are formed in `f64` and narrowed, so each element is the `f32`
/// nearest to the exact double product.
pub fn ramp_inputs(len: usize) -> Result<(NumericBuffer<f32>, NumericBuffer<f32>)> {
    let a = NumericBuffer::from_fn(len, |i| (i as f64 * 0.1) as f32)?;
    let b = NumericBuffer::from_fn(len, |i| (i as f64 * 0.2) as f32)?;
    Ok((a, b))
}

/// Inputs `a[i] = 1.0`, `b[i] = 2.0`
pub fn constant_inputs(len: usize) -> Result<(NumericBuffer<f64>, NumericBuffer<f64>)> {
    Ok((
        NumericBuffer::filled(len, 1.0)?,
        NumericBuffer::filled(len, 2.0)?,
    ))
}

/// Inputs `a = [1..=8]`, `b = [8..=1]`
pub fn mirrored_inputs() -> Result<(NumericBuffer<f32>, NumericBuffer<f32>)> {
    let a = NumericBuffer::from_fn(SIMD_LEN, |i| (i + 1) as f32)?;
    let b = NumericBuffer::from_fn(SIMD_LEN, |i| (SIMD_LEN - i) as f32)?;
    Ok((a, b))
}

/// Scalar sum of the ramp inputs
pub fn scalar_large(len: usize) -> Result<NumericBuffer<f32>> {
    let (a, b) = ramp_inputs(len)?;
    VectorAddKernel::new(KernelConfig::scalar())?.add(&a, &b)
}

/// Parallel sum of the constant inputs
pub fn parallel_large(len: usize) -> Result<NumericBuffer<f64>> {
    let (a, b) = constant_inputs(len)?;
    VectorAddKernel::new(KernelConfig::parallel())?.add(&a, &b)
}

/// SIMD sum of the mirrored inputs
pub fn simd_fixed() -> Result<NumericBuffer<f32>> {
    let (a, b) = mirrored_inputs()?;
    VectorAddKernel::new(KernelConfig::simd())?.add(&a, &b)
}

/// `C[0]=<first>, C[N-1]=<last>` with six decimals; `None` when empty
///
/// # Examples
///
/// ```
/// use vadd::{scenarios, NumericBuffer};
///
/// let c = NumericBuffer::from_slice(&[0.0f32, 0.5, 1.25]).unwrap();
/// assert_eq!(
///     scenarios::scalar_report(&c).unwrap(),
///     "C[0]=0.000000, C[N-1]=1.250000"
/// );
/// ```
pub fn scalar_report(result: &NumericBuffer<f32>) -> Option<String> {
    let (first, last) = result.first().zip(result.last())?;
    Some(format!("C[0]={first:.6}, C[N-1]={last:.6}"))
}

/// `c[0] = <first>, c[N-1] = <last>` in shortest form; `None` when empty
pub fn parallel_report(result: &NumericBuffer<f64>) -> Option<String> {
    let (first, last) = result.first().zip(result.last())?;
    Some(format!("c[0] = {first}, c[N-1] = {last}"))
}

/// Every element with one decimal, each followed by a space
pub fn simd_report(result: &NumericBuffer<f32>) -> String {
    result
        .as_slice()
        .iter()
        .map(|x| format!("{x:.1} "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_inputs() {
        let (a, b) = ramp_inputs(4).unwrap();
        assert_eq!(a.as_slice(), &[0.0, 0.1, 0.2, (3.0f64 * 0.1) as f32]);
        assert_eq!(b[1], 0.2);
    }

    #[test]
    fn test_mirrored_inputs() {
        let (a, b) = mirrored_inputs().unwrap();
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(b.as_slice(), &[8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_scalar_report_format() {
        let c = NumericBuffer::from_slice(&[0.0f32, 3.0]).unwrap();
        assert_eq!(scalar_report(&c).unwrap(), "C[0]=0.000000, C[N-1]=3.000000");
    }

    #[test]
    fn test_parallel_report_format() {
        let c = NumericBuffer::filled(5, 3.0f64).unwrap();
        assert_eq!(parallel_report(&c).unwrap(), "c[0] = 3, c[N-1] = 3");
    }

    #[test]
    fn test_simd_report_format() {
        let c = NumericBuffer::filled(8, 9.0f32).unwrap();
        assert_eq!(simd_report(&c), "9.0 9.0 9.0 9.0 9.0 9.0 9.0 9.0 ");
    }

    #[test]
    fn test_reports_on_empty() {
        let empty32: NumericBuffer<f32> = NumericBuffer::zeroed(0).unwrap();
        let empty64: NumericBuffer<f64> = NumericBuffer::zeroed(0).unwrap();
        assert_eq!(scalar_report(&empty32), None);
        assert_eq!(parallel_report(&empty64), None);
        assert_eq!(simd_report(&empty32), "");
    }
}
