//! Shared helpers for the backend demos

/// Install the demo logger: `RUST_LOG`-controlled, debug-level default so
/// backend lifecycle messages show up.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
}
