use tracing_subscriber::EnvFilter;

/// Console logging only. Diagnostics default to warnings so they do
/// not interleave with the interactive prompts; RUST_LOG overrides.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
