use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable naming a file to receive debug logs
pub const DEBUG_LOG_ENV: &str = "DAYPLAN_DEBUG_LOG";

/// Install the global subscriber.
///
/// The TUI owns the terminal, so detailed logs only go to a file named by
/// `DAYPLAN_DEBUG_LOG`. Without it, warnings and errors go to stderr.
/// `RUST_LOG` overrides the level in either case.
pub fn init() -> Result<()> {
    if let Ok(log_path) = std::env::var(DEBUG_LOG_ENV) {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path))?;

        tracing_subscriber::fmt()
            .with_env_filter(env_filter("debug"))
            .with_writer(std::sync::Mutex::new(log_file))
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter("warn"))
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}
