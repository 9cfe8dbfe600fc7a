//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Build the level filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing/logging for the process.
///
/// Native targets get JSON lines with timestamps on stdout. wasm32 has neither
/// a system clock nor a visible stdout, so it gets plain lines without a timer,
/// written to the browser console.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    #[cfg(not(target_arch = "wasm32"))]
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();

    #[cfg(target_arch = "wasm32")]
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(crate::console::ConsoleWriter::browser())
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        ::tracing::info!("observability initialized twice without panicking");
    }

    #[test]
    fn env_filter_always_builds() {
        let filter = env_filter();
        assert!(!filter.to_string().is_empty());
    }
}
