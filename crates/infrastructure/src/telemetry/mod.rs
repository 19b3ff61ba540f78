//! Logging infrastructure
//!
//! Installs the global `tracing` subscriber with plain-text or JSON output.

mod subscriber;

pub use subscriber::{TelemetryError, init_telemetry};
