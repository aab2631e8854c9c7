//! # Composition Telemetry
//!
//! Structured logging for the composition ordering workspace.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use composition_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config).expect("Failed to init logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CO_SERVICE_NAME` | `composition-ordering` | Service name on every event |
//! | `CO_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `CO_JSON_LOGS` | `false` (`true` in containers) | JSON output |
//! | `CO_LOG_ANSI` | `true` | Coloured pretty output |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("Failed to initialize logging: {0}")]
    Init(String),
}
