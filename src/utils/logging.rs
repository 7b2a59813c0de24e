//! Logging initialisation.
//!
//! Human-readable output on stdout plus JSON lines in a daily rolling
//! file under `LOG_DIR`.

use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialise the tracing subscriber.
///
/// The log level is controlled through `RUST_LOG` (default
/// `info,mntr_server=debug`). File output goes to
/// `<LOG_DIR>/mntr-server.log.YYYY-MM-DD`.
///
/// The returned `WorkerGuard` must be held by `main` for the lifetime of
/// the process, otherwise buffered log lines are lost on shutdown.
pub fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

    let file_appender = rolling::daily(&log_dir, "mntr-server.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mntr_server=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(fmt::layer().json().with_writer(non_blocking))
        .init();

    guard
}
