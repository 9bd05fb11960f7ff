use tracing::Level;
use crate::core::domain::Configuration;

pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

// installs the global subscriber; the catalog transcript is written through it
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(parse_level(config.log_level.as_str()))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .without_time();
    if config.json_logs {
        // ANSI color codes are noise inside json lines.
        builder.with_ansi(false).json().init();
    } else {
        builder.init();
    }
}
