use errorhub_core::{ClassifiedError, Environment, ErrorKind, Severity};

/// Statuses treated as success; everything else is a failure
pub const SUCCESS_CODES: [u16; 3] = [200, 201, 202];

/// Message used when a failing response body cannot be read
pub const UNREADABLE_BODY: &str = "<could not read response content>";

pub fn is_success(status: u16) -> bool {
    SUCCESS_CODES.contains(&status)
}

/// Taxonomy kind for a failing status, falling back to `InternalServerError`
pub fn kind_for_status(status: u16) -> ErrorKind {
    ErrorKind::from_code(status).unwrap_or(ErrorKind::InternalServerError)
}

/// Build the error for a failing downstream response
///
/// The body becomes the message and the observed status is kept as the
/// code even when the kind is the fallback. `service_name` names the
/// caller, not the downstream.
pub fn classify_failure(
    status: u16,
    body: impl Into<String>,
    service_name: &str,
    environment: Environment,
    trace: Option<&str>,
) -> ClassifiedError {
    kind_for_status(status)
        .error(service_name)
        .message(body)
        .severity(Severity::Medium)
        .environment(environment)
        .code(status)
        .maybe_trace_id(trace)
        .build()
}
