use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Output goes to stderr so it never mixes
/// with the operation results printed on stdout.
///
/// `RUST_LOG` takes precedence; otherwise the level is `warn`, or `debug` for
/// this crate when SQL echo is on.
pub(crate) fn init(echo: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(echo));
    // A subscriber may already be installed when embedded; keep the first one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_filter(echo: bool) -> EnvFilter {
    if echo {
        EnvFilter::new("warn,storefront=debug")
    } else {
        EnvFilter::new("warn")
    }
}
