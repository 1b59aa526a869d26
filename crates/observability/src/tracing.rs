//! Subscriber construction for text or JSON records on stderr.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Text,
    /// One JSON object per record, with timestamps.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Overrides [`DEFAULT_FILTER`] when `RUST_LOG` is not set.
    pub default_filter: Option<String>,
}

impl LogConfig {
    pub fn json(mut self, enabled: bool) -> Self {
        self.format = if enabled { LogFormat::Json } else { LogFormat::Text };
        self
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(self.default_filter.as_deref().unwrap_or(DEFAULT_FILTER))
        })
    }
}

/// Build the `fmt` subscriber and try to install it globally.
///
/// Installation errors (a subscriber already set) are ignored.
pub fn init(config: &LogConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Text => builder.without_time().try_init(),
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
    };
}
