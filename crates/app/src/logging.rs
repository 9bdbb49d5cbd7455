use std::env;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter, e.g. `MAZE_LOG=maze_core=trace`.
pub const LOG_ENV: &str = "MAZE_LOG";
const DEFAULT_FILTER: &str = "info";

pub fn log_filter(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global fmt subscriber. A second call is a no-op.
pub fn init_logging() {
    let raw = env::var(LOG_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(raw.as_deref()))
        .with_target(false)
        .try_init();
}
