use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once at startup; honors
/// `RUST_LOG`, defaulting to `info`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
