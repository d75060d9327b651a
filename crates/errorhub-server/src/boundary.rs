use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use errorhub_core::{ClassifiedError, ErrorBuilder, HttpError};
use http::StatusCode;
use serde_json::{Value, json};

/// `service` reported for failures that carry no error detail
pub const UNKNOWN_SERVICE: &str = "Unknown";

/// Stand-in for the `trace` field of unclassified failures
pub const TRACE_PLACEHOLDER: &str = "traceback";

/// Any failure that can reach the request boundary
///
/// The three variants map one-to-one onto the three response shapes a
/// client can see: the full error detail, `{"detail": ..}` for errors the
/// web layer raised itself, and the 500 fallback for everything else.
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    /// Error built through the taxonomy or the generic builder
    #[error(transparent)]
    Classified(#[from] ClassifiedError),

    /// Error raised by the HTTP layer with its own status and message
    #[error("{status}: {detail}")]
    Http { status: StatusCode, detail: String },

    /// Anything else
    #[error("{error_type}: {message}")]
    Unclassified { error_type: String, message: String },
}

impl BoundaryError {
    /// Pass-through error with an explicit status
    pub fn http(status: StatusCode, detail: impl Into<String>) -> Self {
        Self::Http {
            status,
            detail: detail.into(),
        }
    }

    /// Pass-through error from any type that knows its own status
    pub fn from_http_error<E: HttpError + ?Sized>(error: &E) -> Self {
        tracing::debug!(
            error_type = error.error_type(),
            status = error.status_code().as_u16(),
            "HTTP-layer error reached the boundary"
        );

        Self::Http {
            status: error.status_code(),
            detail: error.client_message(),
        }
    }

    /// Fallback for an arbitrary error, keeping its short type name
    #[allow(clippy::needless_pass_by_value)]
    pub fn unclassified<E: std::error::Error>(error: E) -> Self {
        Self::Unclassified {
            error_type: short_type_name::<E>().to_owned(),
            message: error.to_string(),
        }
    }

    /// Status code the response will carry
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Classified(error) => error.status_code(),
            Self::Http { status, .. } => *status,
            Self::Unclassified { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ErrorBuilder> for BoundaryError {
    fn from(builder: ErrorBuilder) -> Self {
        Self::Classified(builder.build())
    }
}

impl From<anyhow::Error> for BoundaryError {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<ClassifiedError>() {
            Ok(classified) => Self::Classified(classified),
            Err(error) => Self::Unclassified {
                error_type: "Error".to_owned(),
                message: error.to_string(),
            },
        }
    }
}

impl From<JsonRejection> for BoundaryError {
    fn from(rejection: JsonRejection) -> Self {
        Self::http(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for BoundaryError {
    fn from(rejection: PathRejection) -> Self {
        Self::http(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for BoundaryError {
    fn from(rejection: QueryRejection) -> Self {
        Self::http(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for BoundaryError {
    fn into_response(self) -> Response {
        match self {
            Self::Classified(error) => {
                // already logged when the error was built
                (error.status_code(), Json(error.to_value())).into_response()
            }
            Self::Http { status, detail } => {
                tracing::debug!(status = status.as_u16(), %detail, "returning HTTP-layer error");
                (status, Json(json!({ "detail": detail }))).into_response()
            }
            Self::Unclassified { error_type, message } => {
                tracing::error!(%error_type, %message, "unclassified failure reached the request boundary");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(fallback_body(&error_type, &message)),
                )
                    .into_response()
            }
        }
    }
}

/// Body returned for failures that were never classified
pub fn fallback_body(error_type: &str, message: &str) -> Value {
    json!({
        "service": UNKNOWN_SERVICE,
        "error_type": error_type,
        "code": 500,
        "message": message,
        "trace": TRACE_PLACEHOLDER,
    })
}

/// Last path segment of a type name, without generic arguments
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
