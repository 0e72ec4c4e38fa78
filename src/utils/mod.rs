//! Process-wide helpers

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "pocket_ledger=warn";

/// Initializes the global tracing subscriber, writing to stderr
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

        // another subscriber may already be installed, e.g. by a test harness
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_tracing_twice_does_not_panic() {
        super::init_tracing();
        super::init_tracing();
    }
}
