//! Logging setup
//!
//! Installs the tracing subscriber for native binaries. `RUST_LOG` wins over
//! the configured level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Default filter directive for a configured level
pub fn default_directive(config: &LoggingConfig) -> String {
    format!("folio={}", config.level)
}

/// Install the global subscriber: pretty output, or JSON lines when
/// `format = "json"`
pub fn init_logging(config: &LoggingConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "json".to_string(),
        };
        assert_eq!(default_directive(&config), "folio=debug");
    }
}
