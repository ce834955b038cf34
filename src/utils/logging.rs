use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter, e.g. `GSCLOUD_LOG=gscloud=trace`
pub const LOG_ENV: &str = "GSCLOUD_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "gscloud=debug,warn" } else { "warn" }
}

/// Install the global subscriber. Everything goes to stderr so stdout stays
/// reserved for command output.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second call (tests) leaves the first subscriber in place
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
