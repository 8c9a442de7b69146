//! Log output setup

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable
const DEFAULT_FILTER: &str = "info";

static INIT: Once = Once::new();

/// Install the fmt subscriber, filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call does anything.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}
