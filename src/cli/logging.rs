use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `POSE_LOG=debug`).
pub const LOG_ENV: &str = "POSE_LOG";

/// Install the global subscriber.
///
/// Logs go to stderr so they never mix with the downstream tool's stdout.
/// Without `POSE_LOG` only warnings and errors are shown.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
