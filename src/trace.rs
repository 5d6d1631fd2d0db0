//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
///
/// The filter comes from `RUST_LOG`, defaulting to warnings only. Logs go
/// to stderr; stdout belongs to search results.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
        {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
