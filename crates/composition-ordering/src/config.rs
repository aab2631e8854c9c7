//! Configuration for the Composition Ordering service

use serde::{Deserialize, Serialize};
use std::env;

/// Ordering configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingConfig {
    /// Maximum units accepted per ordering call (anti-DoS, analyzer cost is quadratic)
    pub max_units: usize,
    /// Re-check every produced order against the relation graph
    pub verify_result: bool,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            max_units: 1024,
            verify_result: true,
        }
    }
}

impl OrderingConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CO_MAX_UNITS`: Maximum units per call (default: 1024)
    /// - `CO_VERIFY_RESULT`: Verify produced orders (default: true)
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`OrderingConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            max_units: lookup("CO_MAX_UNITS")
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.max_units),

            verify_result: lookup("CO_VERIFY_RESULT")
                .and_then(|value| parse_flag(&value))
                .unwrap_or(defaults.verify_result),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
