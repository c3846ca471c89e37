//! Tracing initialisation
//!
//! Structured logging setup shared by binaries and integration tests. The
//! filter comes from `RUST_LOG` when set, defaulting to `info`.

use nutriflow_domain::{NutriFlowError, Result};
use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
///
/// # Errors
/// Returns `NutriFlowError::Internal` when a global subscriber has already
/// been installed.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|err| NutriFlowError::Internal(format!("failed to init tracing: {err}")))
}
