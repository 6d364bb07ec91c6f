//! Logging setup on top of `env_logger`.

use env_logger::Builder;

/// Environment variable holding the log filter, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "AI_STUDIO_LOG";

/// Builds the filter string used when no environment override is set.
/// Chatty HTTP internals stay at `warn` whatever the app level is.
pub fn default_filter(level: &str) -> String {
    let level = match level.to_lowercase().as_str() {
        "error" | "warn" | "info" | "debug" | "trace" | "off" => level.to_lowercase(),
        _ => "warn".to_string(),
    };
    format!("{level},hyper=warn,h2=warn,reqwest=warn,rustls=warn")
}

/// Initializes the global logger. Safe to call more than once.
pub fn init(level: &str) {
    let filter = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_filter(level));

    let _ = Builder::new()
        .parse_filters(&filter)
        .format_timestamp_millis()
        .try_init();
}
