//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the engine's tracing/logging system.
///
/// Reads the `REALIGN_LOG` environment variable for per-subsystem log
/// levels, e.g. `REALIGN_LOG=realign_analysis::roi=debug,realign_core=warn`.
/// Falls back to `realign=info` if unset or invalid.
///
/// Idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("REALIGN_LOG")
            .unwrap_or_else(|_| EnvFilter::new("realign=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
