use tracing_subscriber::EnvFilter;
use tsuyaku_config::logging::{LogFormat, LoggingConfig};

/// Install the global subscriber. Logs go to stderr; stdout carries results.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let ansi = atty::is(atty::Stream::Stderr);

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(env_filter)
                .with_ansi(ansi)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Compact => {
            tracing_subscriber::fmt()
                .compact()
                .with_env_filter(env_filter)
                .with_ansi(ansi)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
