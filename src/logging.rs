use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Honours `RUST_LOG`, defaults to `info`,
/// and writes to stderr so stdout only carries rendered output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
