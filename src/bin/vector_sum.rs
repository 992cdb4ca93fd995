//! Scalar sum of two 1M-element `f32` ramps
//!
//! Prints the first and last element of `C = A + B` where
//! `A[i] = i * 0.1` and `B[i] = i * 0.2`.

use anyhow::{Context, Result};
use vadd::scenarios;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    #[cfg(feature = "tracing")]
    vadd::logging::init_stderr(tracing_subscriber::filter::LevelFilter::WARN);

    let c = scenarios::scalar_large(scenarios::LARGE_LEN).context("scalar vector sum failed")?;
    let report = scenarios::scalar_report(&c).context("result buffer is empty")?;
    println!("{report}");
    Ok(())
}
