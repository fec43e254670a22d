// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Tracing infrastructure.
//!
//! The library only emits events: `trace!` for label dispatch and `debug!`
//! for fallbacks and config loads. Binaries decide where they go by
//! installing a subscriber once at startup:
//!
//! ```rust,ignore
//! use toolbadge::telemetry::{init_telemetry, TelemetryConfig};
//!
//! let _guard = init_telemetry(&TelemetryConfig::default())?;
//! ```

mod init;

pub use init::{init_telemetry, TelemetryConfig, TelemetryGuard};
