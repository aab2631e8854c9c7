//! Subscriber installation and structured logging helpers.
//!
//! Every event carries the same core fields so log pipelines can group
//! them: `service`, `level`, `target`, `message`, plus the event's own
//! fields (`unit_count`, `edge_count`, `cycle`, ...).

use crate::{TelemetryConfig, TelemetryError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the level filter for a configuration.
pub fn build_env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::InvalidFilter {
        directive: config.log_level.clone(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber.
///
/// JSON output for containers and log shipping, pretty output otherwise.
/// Fails with [`TelemetryError::Init`] if a global subscriber is already set.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_env_filter(config)?;

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(config.ansi);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    tracing::info!(
        service = %config.service_name,
        level = %config.log_level,
        json_logs = config.json_logs,
        "Logging initialized"
    );

    Ok(())
}

/// Log an ordering event with the service field attached.
///
/// ```rust,ignore
/// log_ordering_event!(info, "composition-ordering", "Ordered units", unit_count = 4);
/// ```
#[macro_export]
macro_rules! log_ordering_event {
    ($level:ident, $service:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            service = $service,
            $($($field)*,)?
            $msg
        )
    };
}
