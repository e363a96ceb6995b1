//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the reqtree tracing/logging system.
///
/// Reads the `REQTREE_LOG` environment variable for per-module log levels.
/// Format: `REQTREE_LOG=reqtree_engine::criteria=debug,reqtree_core=warn`
///
/// Falls back to `reqtree=info` if `REQTREE_LOG` is not set or is invalid.
///
/// Idempotent; an already-installed global subscriber is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("reqtree=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
