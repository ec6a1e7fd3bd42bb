//! Tracing/logging setup shared by binaries and tests.

/// Initialize process-wide logging, filter from `RUST_LOG` (default `info`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize logging with an explicit filter directive (e.g. `HOTELMAN_LOG`).
pub fn init_with_filter(directive: &str) {
    tracing::init_with_filter(directive);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
