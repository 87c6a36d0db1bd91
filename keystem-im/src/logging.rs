//! Process-wide logging setup

use std::sync::Once;

use crate::config::Settings;

static INIT_LOGGING: Once = Once::new();

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins over `debug.log_level` from the settings. Only the first
/// call has an effect.
pub fn init_logging(settings: &Settings) {
    INIT_LOGGING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .or_else(|_| tracing_subscriber::EnvFilter::try_new(&settings.debug.log_level))
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        // Another subscriber may already be installed by the host
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
