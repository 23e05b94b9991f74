//! Logger initialisation for the binary.
//!
//! Library crates only log through the `log` facade; installing a logger is
//! left to whoever owns `main`.

use env_logger::{Builder, Env};
use supermind_foundation::{Error, Result};

/// Installs `env_logger` with `default_filter`, unless `RUST_LOG` overrides it.
///
/// # Errors
///
/// Returns a config error if a logger is already installed.
pub fn init(default_filter: &str) -> Result<()> {
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_target(false)
        .try_init()
        .map_err(|e| Error::config(format!("failed to initialise logging: {e}")))
}
