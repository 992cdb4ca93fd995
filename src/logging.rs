//! Stderr logging for the executables (`tracing` feature)
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary. Output goes to stderr so stdout carries nothing but results.

use tracing_subscriber::filter::LevelFilter;

/// Install a stderr fmt subscriber at `level`
///
/// Returns `false`, leaving the existing subscriber in place, when a global
/// subscriber was already set.
pub fn init_stderr(level: LevelFilter) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();

    match installed {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "keeping existing global subscriber");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_keeps_first_subscriber() {
        // Other tests in this binary may have installed one already
        init_stderr(LevelFilter::WARN);
        assert!(!init_stderr(LevelFilter::DEBUG));
    }
}
