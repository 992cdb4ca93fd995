//! End-to-end checks of the three fixed workloads

use vadd::scenarios::{self, LARGE_LEN};

#[test]
fn scalar_large_vectors() {
    let c = scenarios::scalar_large(LARGE_LEN).expect("scalar scenario");

    assert_eq!(c.len(), LARGE_LEN);
    assert_eq!(c[0], 0.0);

    let last = c.last().unwrap();
    let expected = 999_999.0 * 0.3;
    assert!(
        (f64::from(last) - expected).abs() < 0.1,
        "C[N-1] = {last}, expected about {expected}"
    );

    // Narrowed inputs, then one f32 addition
    let a_last = (999_999.0f64 * 0.1) as f32;
    let b_last = (999_999.0f64 * 0.2) as f32;
    assert_eq!(last.to_bits(), (a_last + b_last).to_bits());
}

#[test]
fn scalar_report_line() {
    let c = scenarios::scalar_large(LARGE_LEN).unwrap();
    let line = scenarios::scalar_report(&c).unwrap();

    assert_eq!(line, "C[0]=0.000000, C[N-1]=299999.687500");
    assert_eq!(line, format!("C[0]=0.000000, C[N-1]={:.6}", c.last().unwrap()));
}

#[test]
fn parallel_large_vectors() {
    let c = scenarios::parallel_large(LARGE_LEN).expect("parallel scenario");

    assert_eq!(c.len(), LARGE_LEN);
    assert_eq!(c[0], 3.0);
    assert_eq!(c[LARGE_LEN - 1], 3.0);
    assert!(c.as_slice().iter().all(|&x| x == 3.0));
    assert_eq!(
        scenarios::parallel_report(&c).unwrap(),
        "c[0] = 3, c[N-1] = 3"
    );
}

#[test]
fn fixed_small_simd_vectors() {
    let c = scenarios::simd_fixed().expect("simd scenario");

    assert_eq!(c.as_slice(), &[9.0; 8]);
    assert_eq!(
        scenarios::simd_report(&c),
        "9.0 9.0 9.0 9.0 9.0 9.0 9.0 9.0 "
    );
}

#[test]
fn scenarios_scale_down() {
    assert!(scenarios::scalar_large(0).unwrap().is_empty());
    assert!(scenarios::parallel_large(0).unwrap().is_empty());
    assert_eq!(scenarios::parallel_large(17).unwrap().as_slice(), &[3.0; 17]);
}
