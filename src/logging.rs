//! Structured logging for morfo
//!
//! This module provides structured logging using the `tracing` crate.
//! Analysis itself never logs; load-time events (dictionary rows skipped,
//! fallback lexicon missing) surface here.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::env::EnvConfig;

/// Initialize the logging system
///
/// This should be called once at program startup.
/// The log level can be controlled via the MORFO_LOG_LEVEL environment variable.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let config = EnvConfig::from_env();

    let filter = match config.log_level.as_str() {
        "trace" => EnvFilter::new("trace"),
        "debug" => EnvFilter::new("debug"),
        "info" => EnvFilter::new("info"),
        "warn" => EnvFilter::new("warn"),
        "error" => EnvFilter::new("error"),
        _ => EnvFilter::new("info"),
    };

    // Add RUST_LOG support as fallback
    let filter = filter.add_directive(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string())
            .parse()?,
    );

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(config.debug_mode)
        .with_line_number(config.debug_mode);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize logging for tests
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

// Re-export commonly used tracing macros
pub use tracing::{debug, error, info, trace, warn};

/// Log one word analysis with structured fields
#[macro_export]
macro_rules! log_analysis {
    ($level:expr, $word:expr, $($field:tt)*) => {
        tracing::event!(
            $level,
            word = %$word,
            category = "analysis",
            $($field)*
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_logging_macros() {
        init_test_logging();

        info!("Test info message");
        warn!("Test warning");

        info!(entries = 42, source = "vortaro.tsv", "dictionary loaded");
        log_analysis!(Level::DEBUG, "abateco", valid = true, segments = 3);
    }
}
