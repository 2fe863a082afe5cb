use std::env;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_DIRECTIVES: &str = "info";

/// Installs the global subscriber for a binary.
///
/// Logs go to stderr; stdout is reserved for the JSON result. A valid
/// `RUST_LOG` replaces the default `info` level.
pub fn init() {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::registry()
        .with(env_filter(directives.as_deref()))
        .with(stderr_layer)
        .try_init();
}

fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}
