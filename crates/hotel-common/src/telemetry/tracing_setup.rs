//! Tracing and logging setup
//!
//! Installs a `tracing` subscriber writing to stderr, so tools that print
//! results on stdout keep their output clean. `RUST_LOG` overrides the
//! configured level.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Level used when `RUST_LOG` is not set
    pub level: Level,
    /// One JSON object per event instead of human-readable lines
    pub json: bool,
    /// Emit an event when a span opens and closes
    pub span_events: bool,
    /// Tag events with the source file and line
    pub source_location: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl TracingConfig {
    /// Verbose readable output for local runs
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            json: false,
            span_events: true,
            source_location: true,
        }
    }

    /// Structured output for log collectors
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            json: true,
            span_events: false,
            source_location: false,
        }
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.to_string()))
    }
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already set for this process.
///
/// ```no_run
/// use hotel_common::{try_init_tracing, AppConfig};
///
/// let config = AppConfig::from_env()?;
/// try_init_tracing(&config.tracing_config())?;
/// tracing::info!(app = %config.app.name, "Logging ready");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn try_init_tracing(config: &TracingConfig) -> Result<(), TracingError> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_span_events(config.span_events());

    let registry = tracing_subscriber::registry().with(config.env_filter());
    let installed = if config.json {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer).try_init()
    };
    installed.map_err(|_| TracingError::AlreadyInitialized)
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
