use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable read by the binaries for the log filter.
pub const LOG_ENV: &str = "WORDLIST_LOG";

/// Install the global subscriber, logging to stderr so that
/// the standard output stays usable for results.
///
/// `filter` uses the `EnvFilter` syntax (`info`, `wordlist=debug`...).
pub fn init(filter: &str) -> Result<(), String> {
    fmt()
        .with_env_filter(
            EnvFilter::try_new(filter).map_err(|error| format!("Invalid log filter \"{}\" ({})", filter, error))?,
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|_| String::from("Logging already initialized"))
}
