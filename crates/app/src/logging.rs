use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. Defaults to `info`; `RUST_LOG` overrides it.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
