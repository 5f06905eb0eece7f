use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries the reports.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "mailverdict=debug,info"
    } else {
        "mailverdict=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
