//! `tracing` subscriber setup for the session binary.

use std::fs::File;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file path.
pub const LOG_ENV: &str = "DEALERDESK_LOG";

/// `RUST_LOG` if set, otherwise `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// `{base}.{timestamp}.{pid}`, so two sessions never share a log file.
fn session_log_path(base: &str) -> String {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{base}.{timestamp}.{}", std::process::id())
}

/// File logging, enabled only when `DEALERDESK_LOG` names a path.
///
/// Without it nothing is installed and the interactive prompt stays clean.
pub fn init_tracing() {
    let Ok(base) = std::env::var(LOG_ENV) else {
        return;
    };

    let path = session_log_path(&base);
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: cannot create log file {path}: {e}");
            return;
        }
    };

    tracing_subscriber::registry()
        .with(env_filter("info"))
        .with(fmt::layer().with_writer(file).with_ansi(false))
        .init();
}

/// Log to stderr at `debug` unless `RUST_LOG` says otherwise.
pub fn init_stderr_tracing() {
    tracing_subscriber::registry()
        .with(env_filter("debug"))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(UtcTime::rfc_3339()),
        )
        .init();
}
