use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. Everything goes to stderr; stdout
/// carries only generated text. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "promptc=debug,promptc_lib=debug,llmapi=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("Failed to install log subscriber: {err}");
    }
}
