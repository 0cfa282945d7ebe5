use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber for the binaries.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` with `verbose` and
/// `info` without. Output goes to stderr so stdout stays free for piping.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
