//! Logging setup
//!
//! `RUST_LOG` takes precedence; otherwise the configured level applies to this
//! crate and HTTP tracing is kept at `info`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(config: &LoggingConfig) -> String {
    format!("socialauto={},tower_http=info", config.level.trim().to_lowercase())
}

/// Install the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        let config = LoggingConfig {
            level: " DEBUG ".to_string(),
            format: "pretty".to_string(),
        };
        assert_eq!(default_directive(&config), "socialauto=debug,tower_http=info");
    }
}
