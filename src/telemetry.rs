//! Tracing setup for binaries.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "haven_ui=info,haven_client=info";

/// Install a fmt subscriber honouring `RUST_LOG`. Safe to call twice; the
/// second call is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
