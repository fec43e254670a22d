// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Telemetry initialization and configuration.

use std::io;
use tracing::{Level, Subscriber};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for telemetry initialization.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Log level used when RUST_LOG is not set.
    pub default_level: Level,

    /// Whether to use ANSI colors in output.
    pub ansi_colors: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            default_level: Level::WARN,
            ansi_colors: true,
        }
    }
}

impl TelemetryConfig {
    /// Set the default log level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    /// Enable or disable ANSI colors.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi_colors = ansi;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_level.to_string()))
    }
}

/// Guard that keeps telemetry alive for the program's lifetime.
///
/// Logs go straight to stderr, so dropping it has nothing to flush yet.
pub struct TelemetryGuard {
    _private: (),
}

/// Build the compact fmt subscriber for a config and writer.
fn subscriber<W>(config: &TelemetryConfig, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.ansi_colors)
        .with_target(true)
        .compact();

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt_layer)
}

/// Initialize telemetry with the given configuration.
///
/// This should be called once at application startup. Logs are written to
/// stderr so they never mix with labels printed on stdout.
///
/// # Example
///
/// ```rust,ignore
/// use toolbadge::telemetry::{init_telemetry, TelemetryConfig};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let _guard = init_telemetry(&TelemetryConfig::default().with_ansi(false))?;
///     Ok(())
/// }
/// ```
pub fn init_telemetry(config: &TelemetryConfig) -> io::Result<TelemetryGuard> {
    subscriber(config, io::stderr)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(TelemetryGuard { _private: () })
}
