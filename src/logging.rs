//! Console logging setup.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INSTALLED: Once = Once::new();

/// Installs the console subscriber (idempotent).
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init() {
    INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init();
        if result.is_err() {
            eprintln!("moneta logging failed to initialize");
        }
    });
}
