//! Logging setup for binaries

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{RuntimeError, RuntimeResult};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "safe=info,amr_demo=info";

/// Install the global tracing subscriber.
///
/// `LOG_FORMAT=json` switches to JSON lines; anything else is human-readable.
pub fn init_logging() -> RuntimeResult<()> {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let result = if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .try_init()
    };

    result.map_err(|e| RuntimeError::Logging(e.to_string()))
}
