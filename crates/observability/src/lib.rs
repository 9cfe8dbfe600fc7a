//! Tracing and logging (shared setup).

/// Initialize process-wide tracing/logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Browser console output for wasm32 builds.
pub mod console;

/// Tracing configuration (filters, output format).
pub mod tracing;
