//! SIMD add of two fixed 8-element `f32` arrays
//!
//! `[1..=8] + [8..=1]` in a single 256-bit batch where AVX is available,
//! otherwise on the best detected backend plus scalar tail.

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

    let result = scenarios::simd_fixed().context("SIMD vector add failed")?;
    println!("{}", scenarios::simd_report(&result));
    Ok(())
}
