//! Structured logging setup.
//!
//! Logs go to stderr so they never mix with chat output on stdout.

use tracing_subscriber::EnvFilter;

/// Picks the log filter.
///
/// Resolution order:
/// 1. `--log-level` if given and valid
/// 2. `RUST_LOG` if set and valid
/// 3. `default`
pub fn filter(cli_level: Option<&str>, default: &str) -> EnvFilter {
    if let Some(level) = cli_level {
        match level.parse::<EnvFilter>() {
            Ok(filter) => return filter,
            Err(e) => eprintln!(
                "WARN: --log-level '{level}' is not a valid tracing filter ({e}); ignoring it"
            ),
        }
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(cli_level: Option<&str>, default: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(cli_level, default))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_cli_level_wins() {
        let filter = filter(Some("debug"), "warn");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    #[serial]
    fn test_falls_back_to_default() {
        let original = std::env::var("RUST_LOG").ok();
        unsafe { std::env::remove_var("RUST_LOG") };

        assert_eq!(filter(None, "info").to_string(), "info");
        assert_eq!(filter(Some("chatbot=notalevel"), "warn").to_string(), "warn");

        if let Some(val) = original {
            unsafe { std::env::set_var("RUST_LOG", val) };
        }
    }
}
