//! Tracing setup for the server binary and the test suites.
//!
//! `RUST_LOG` wins when set. Otherwise only this crate and the HTTP trace
//! layer log at the configured level; dependencies stay at `warn`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::{InkwellError, Result};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Map a configured level onto one `EnvFilter` understands, falling back to `info`.
fn normalize_level(level: &str) -> &'static str {
    let level = level.trim().to_ascii_lowercase();
    if level == "warning" {
        return "warn";
    }
    LEVELS
        .iter()
        .copied()
        .find(|known| *known == level)
        .unwrap_or("info")
}

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_directives(level: &str) -> String {
    let level = normalize_level(level);
    format!("warn,inkwell={level},tower_http={level}")
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// Install the console subscriber for the server.
///
/// Fails if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(build_filter(&config.level))
        .try_init()
        .map_err(|e| InkwellError::Config(format!("logging init failed: {e}")))
}

/// Route events through the test harness's captured output.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_for_tests() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(build_filter("debug"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level("DEBUG"), "debug");
        assert_eq!(normalize_level(" warning "), "warn");
        assert_eq!(normalize_level("error"), "error");
        assert_eq!(normalize_level("verbose"), "info");
        assert_eq!(normalize_level(""), "info");
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives("debug"),
            "warn,inkwell=debug,tower_http=debug"
        );
        assert_eq!(
            default_directives("nonsense"),
            "warn,inkwell=info,tower_http=info"
        );
        // Every directive set we build must parse
        for level in LEVELS {
            assert!(EnvFilter::try_new(default_directives(level)).is_ok());
        }
    }

    #[test]
    fn test_init_after_test_subscriber_fails() {
        init_for_tests();
        init_for_tests();

        let result = init(&LoggingConfig::default());
        assert!(matches!(result, Err(InkwellError::Config(_))));
    }
}
