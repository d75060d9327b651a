use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value, json};

/// Operational urgency of an error, independent of its status code
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    /// Wire representation (`low`, `medium`, `high`)
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Deployment environment the error was raised in
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Wire representation (`development`, `staging`, `production`)
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Structured record of a single error occurrence
///
/// This is what goes on the wire as a response body and into the log
/// payload. Values are assigned once by
/// [`ErrorBuilder::build`](crate::ErrorBuilder::build); a
/// [`ClassifiedError`](crate::ClassifiedError) only hands out shared
/// references to its detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Name of the service that emitted the error
    pub service: String,
    /// Taxonomy kind name (e.g. `NotFound`) or a custom type
    pub error_type: String,
    /// HTTP-style status code
    pub code: u16,
    /// Human-readable description
    pub message: String,
    /// Creation time (UTC, RFC 3339 on the wire)
    pub timestamp: Timestamp,
    /// Unique identifier of this occurrence
    pub trace_id: String,
    pub severity: Severity,
    pub environment: Environment,
    /// Auxiliary diagnostic data such as request parameters
    #[serde(default, deserialize_with = "null_as_empty")]
    pub context: Map<String, Value>,
}

impl ErrorDetail {
    /// Plain structured mapping of every field, ready to be used as a body
    pub fn to_value(&self) -> Value {
        json!({
            "service": self.service,
            "error_type": self.error_type,
            "code": self.code,
            "message": self.message,
            "timestamp": self.timestamp.to_string(),
            "trace_id": self.trace_id,
            "severity": self.severity.as_str(),
            "environment": self.environment.as_str(),
            "context": self.context,
        })
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {} | {}", self.service, self.error_type, self.code, self.message)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}
