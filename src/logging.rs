use tracing_subscriber::EnvFilter;

/// Default filter directive for a run
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "hexaco_score=debug"
    } else {
        "hexaco_score=info"
    }
}

/// Install the global tracing subscriber, writing to stderr so stdout only
/// carries the score summary. `RUST_LOG` takes precedence when set.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
