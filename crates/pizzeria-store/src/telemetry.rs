//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::error::{StoreError, StoreResult};

/// Installs the global `tracing` subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pizzeria_store=trace` - Trace the store crate only
/// - Otherwise: `default_filter` (the config's `logging.filter`)
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> StoreResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| StoreError::InvalidConfig(format!("tracing already initialised: {e}")))
}
