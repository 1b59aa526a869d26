//! Logging setup for the `matcost` binary.
//!
//! Records go to stderr so that command reports on stdout stay clean.

/// Install the process-wide subscriber described by `config`.
///
/// Only the first call takes effect; later calls leave the installed
/// subscriber in place.
pub fn init(config: &LogConfig) {
    tracing::init(config);
}

/// Subscriber construction (filter, format, writer).
pub mod tracing;

pub use tracing::{LogConfig, LogFormat};
