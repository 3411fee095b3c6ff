// src/logging.rs
// =============================================================================
// Sets up structured logging with tracing.
//
// Logs go to stderr so stdout only ever carries command output (tables,
// JSON, downloaded files). RUST_LOG overrides the default level.
// =============================================================================

use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "gh_dir=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("logging initialized");
}
