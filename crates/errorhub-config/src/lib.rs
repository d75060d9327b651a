#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod telemetry;

use errorhub_core::ServiceIdentity;
use serde::Deserialize;

pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level errorhub configuration
///
/// ```toml
/// [service]
/// name = "orders"
/// environment = "{{ env.APP_ENV | default(\"development\") }}"
///
/// [telemetry]
/// filter = "info,errorhub=warn"
/// format = "json"
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Identity stamped on every error this service raises
    pub service: ServiceIdentity,
    /// Log output configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
