use http::StatusCode;

/// Trait for errors that already know how to present themselves over HTTP
///
/// Implemented by [`ClassifiedError`](crate::ClassifiedError) and by any
/// transport-level error a host web layer raises. The boundary adapter
/// turns these into responses without needing to know the concrete type.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `NotFound`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}
