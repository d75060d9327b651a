//! Severity-driven error logging
//!
//! Every error built through [`ErrorBuilder`](crate::ErrorBuilder) passes
//! through [`log_error_detail`] exactly once. The level follows the
//! severity: `high` logs at ERROR, `medium` at WARN and `low` at INFO.
//! Sink configuration is left to whoever installs the subscriber.

use crate::model::{ErrorDetail, Severity};

/// Target used for every error record
pub const LOG_TARGET: &str = "errorhub";

/// Emit one log record for an error occurrence
///
/// The full serialized detail goes into the `error_detail` field. Rendering
/// is infallible, so a broken payload can never surface as a second error.
pub fn log_error_detail(detail: &ErrorDetail) {
    let payload = detail.to_value().to_string();

    match detail.severity {
        Severity::High => tracing::error!(
            target: LOG_TARGET,
            service = %detail.service,
            error_type = %detail.error_type,
            code = detail.code,
            trace_id = %detail.trace_id,
            error_detail = %payload,
            "high severity error occurred"
        ),
        Severity::Medium => tracing::warn!(
            target: LOG_TARGET,
            service = %detail.service,
            error_type = %detail.error_type,
            code = detail.code,
            trace_id = %detail.trace_id,
            error_detail = %payload,
            "medium severity error occurred"
        ),
        Severity::Low => tracing::info!(
            target: LOG_TARGET,
            service = %detail.service,
            error_type = %detail.error_type,
            code = detail.code,
            trace_id = %detail.trace_id,
            error_detail = %payload,
            "low severity error occurred"
        ),
    }
}
