//! JSON log output with an `EnvFilter`.

use tracing_subscriber::EnvFilter;

/// Install the subscriber with the filter from `RUST_LOG`, falling back to `info`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter);
}

/// Install the subscriber with `directive`; an unparsable directive falls back to `info`.
pub fn init_with_filter(directive: &str) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => install(filter),
        Err(e) => {
            install(EnvFilter::new("info"));
            ::tracing::warn!("invalid log filter {directive:?}: {e}; using info");
        }
    }
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
