//! Structured logging setup.
//!
//! Initializes a `tracing` subscriber writing to stderr, so `--json` output on
//! stdout stays machine-readable:
//! - `RUST_LOG` environment filter support
//! - Default level: INFO for fauxvox crates
//! - JSON output when `FAUXVOX_LOG_FORMAT=json`

use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "fauxvox_cli=info,fauxvox_audio=info";

/// Initialize the global tracing subscriber.
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let is_json = std::env::var("FAUXVOX_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    if is_json {
        let _ = subscriber.json().try_init();
    } else {
        let _ = subscriber.try_init();
    }
}
