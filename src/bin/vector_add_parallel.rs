//! Parallel sum of two 1M-element `f64` constant vectors
//!
//! The index range is split into one contiguous partition per hardware
//! thread; the result is printed only after every partition has joined.

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

    let c = scenarios::parallel_large(scenarios::LARGE_LEN)
        .context("parallel vector add failed")?;
    let report = scenarios::parallel_report(&c).context("result buffer is empty")?;
    println!("{report}");
    Ok(())
}
