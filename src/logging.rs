use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostics on stderr, filtered by `RUST_LOG` (default "warn").
///
/// Report output goes to stdout through `ui`; this only carries loader and
/// dispatcher diagnostics, so it never mixes with the report text.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (tests calling run() twice) is harmless
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
