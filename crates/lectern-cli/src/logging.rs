//! tracing-subscriber setup
//!
//! Filter precedence: `RUST_LOG`, then `--log-level`/`-v`, then
//! `logging.level` from the config file. Logs go to stderr so command output
//! on stdout stays machine readable.

use lectern_config::{LogFormat, LoggingConfig};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "info";

/// Build the filter from the environment, the CLI and the config file
pub fn build_filter(
    env: Option<&str>,
    cli_level: Option<LevelFilter>,
    config: &LoggingConfig,
) -> EnvFilter {
    if let Some(directives) = env.filter(|d| !d.trim().is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return filter;
        }
        eprintln!("Ignoring invalid RUST_LOG value: {directives}");
    }

    if let Some(level) = cli_level {
        return EnvFilter::new(level.to_string());
    }

    EnvFilter::try_new(&config.level).unwrap_or_else(|_| {
        eprintln!(
            "Ignoring invalid logging.level {:?}, using {DEFAULT_DIRECTIVE}",
            config.level
        );
        EnvFilter::new(DEFAULT_DIRECTIVE)
    })
}

/// Install the global subscriber
pub fn init(cli_level: Option<LevelFilter>, config: &LoggingConfig) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env.as_deref(), cli_level, config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Text => builder.init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}
