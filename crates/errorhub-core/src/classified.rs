use http::StatusCode;
use jiff::Timestamp;
use serde_json::{Map, Value};

use crate::error::HttpError;
use crate::logging;
use crate::model::{Environment, ErrorDetail, Severity};
use crate::taxonomy::ErrorKind;

/// A failure carrying exactly one [`ErrorDetail`]
///
/// One variant per taxonomy kind, plus [`ClassifiedError::Other`] for
/// errors built outside the fixed table. Construct through the named
/// constructors (`ClassifiedError::not_found(..)` and friends) or
/// [`ClassifiedError::builder`]; both log the error when built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifiedError {
    #[error("{0}")]
    BadRequest(Box<ErrorDetail>),
    #[error("{0}")]
    Unauthorized(Box<ErrorDetail>),
    #[error("{0}")]
    Forbidden(Box<ErrorDetail>),
    #[error("{0}")]
    NotFound(Box<ErrorDetail>),
    #[error("{0}")]
    Conflict(Box<ErrorDetail>),
    #[error("{0}")]
    UnprocessableEntity(Box<ErrorDetail>),
    #[error("{0}")]
    InternalServerError(Box<ErrorDetail>),
    #[error("{0}")]
    ServiceUnavailable(Box<ErrorDetail>),
    #[error("{0}")]
    GatewayTimeout(Box<ErrorDetail>),
    /// Error type outside the taxonomy
    #[error("{0}")]
    Other(Box<ErrorDetail>),
}

impl ClassifiedError {
    /// 400 Bad request
    pub fn bad_request(service: impl Into<String>) -> ErrorBuilder {
        ErrorBuilder::for_kind(ErrorKind::BadRequest, service)
    }

    /// 401 Unauthorized
    pub fn unauthorized(service: impl Into<String>) -> ErrorBuilder {
        ErrorBuilder::for_kind(ErrorKind::Unauthorized, service)
    }

    /// 403 Forbidden
    pub fn forbidden(service: impl Into<String>) -> ErrorBuilder {
        ErrorBuilder::for_kind(ErrorKind::Forbidden, service)
    }

    /// 404 Resource not found
    pub fn not_found(service: impl Into<String>) -> ErrorBuilder {
        ErrorBuilder::for_kind(ErrorKind::NotFound, service)
    }

    /// 409 Conflict
    pub fn conflict(service: impl Into<String>) -> ErrorBuilder {
        ErrorBuilder::for_kind(ErrorKind::Conflict, service)
    }

    /// 422 Unprocessable entity
    pub fn unprocessable_entity(service: impl Into<String>) -> ErrorBuilder {
        ErrorBuilder::for_kind(ErrorKind::UnprocessableEntity, service)
    }

    /// 500 Internal server error
    pub fn internal_server_error(service: impl Into<String>) -> ErrorBuilder {
        ErrorBuilder::for_kind(ErrorKind::InternalServerError, service)
    }

    /// 503 Service unavailable
    pub fn service_unavailable(service: impl Into<String>) -> ErrorBuilder {
        ErrorBuilder::for_kind(ErrorKind::ServiceUnavailable, service)
    }

    /// 504 Gateway timeout
    pub fn gateway_timeout(service: impl Into<String>) -> ErrorBuilder {
        ErrorBuilder::for_kind(ErrorKind::GatewayTimeout, service)
    }

    /// Generic error with a caller-chosen type; `code` defaults to 500
    pub fn builder(
        service: impl Into<String>,
        error_type: impl Into<String>,
        message: impl Into<String>,
    ) -> ErrorBuilder {
        ErrorBuilder {
            kind: None,
            service: service.into(),
            error_type: error_type.into(),
            message: message.into(),
            code: 500,
            severity: Severity::default(),
            environment: Environment::default(),
            trace_id: None,
            context: Map::new(),
        }
    }

    fn from_parts(kind: Option<ErrorKind>, detail: Box<ErrorDetail>) -> Self {
        match kind {
            Some(ErrorKind::BadRequest) => Self::BadRequest(detail),
            Some(ErrorKind::Unauthorized) => Self::Unauthorized(detail),
            Some(ErrorKind::Forbidden) => Self::Forbidden(detail),
            Some(ErrorKind::NotFound) => Self::NotFound(detail),
            Some(ErrorKind::Conflict) => Self::Conflict(detail),
            Some(ErrorKind::UnprocessableEntity) => Self::UnprocessableEntity(detail),
            Some(ErrorKind::InternalServerError) => Self::InternalServerError(detail),
            Some(ErrorKind::ServiceUnavailable) => Self::ServiceUnavailable(detail),
            Some(ErrorKind::GatewayTimeout) => Self::GatewayTimeout(detail),
            None => Self::Other(detail),
        }
    }

    /// Taxonomy kind, `None` for [`ClassifiedError::Other`]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::BadRequest(_) => Some(ErrorKind::BadRequest),
            Self::Unauthorized(_) => Some(ErrorKind::Unauthorized),
            Self::Forbidden(_) => Some(ErrorKind::Forbidden),
            Self::NotFound(_) => Some(ErrorKind::NotFound),
            Self::Conflict(_) => Some(ErrorKind::Conflict),
            Self::UnprocessableEntity(_) => Some(ErrorKind::UnprocessableEntity),
            Self::InternalServerError(_) => Some(ErrorKind::InternalServerError),
            Self::ServiceUnavailable(_) => Some(ErrorKind::ServiceUnavailable),
            Self::GatewayTimeout(_) => Some(ErrorKind::GatewayTimeout),
            Self::Other(_) => None,
        }
    }

    /// The carried error detail
    pub fn detail(&self) -> &ErrorDetail {
        match self {
            Self::BadRequest(detail)
            | Self::Unauthorized(detail)
            | Self::Forbidden(detail)
            | Self::NotFound(detail)
            | Self::Conflict(detail)
            | Self::UnprocessableEntity(detail)
            | Self::InternalServerError(detail)
            | Self::ServiceUnavailable(detail)
            | Self::GatewayTimeout(detail)
            | Self::Other(detail) => detail,
        }
    }

    /// Take ownership of the carried error detail
    pub fn into_detail(self) -> ErrorDetail {
        match self {
            Self::BadRequest(detail)
            | Self::Unauthorized(detail)
            | Self::Forbidden(detail)
            | Self::NotFound(detail)
            | Self::Conflict(detail)
            | Self::UnprocessableEntity(detail)
            | Self::InternalServerError(detail)
            | Self::ServiceUnavailable(detail)
            | Self::GatewayTimeout(detail)
            | Self::Other(detail) => *detail,
        }
    }

    /// Status code recorded in the detail
    pub fn code(&self) -> u16 {
        self.detail().code
    }

    /// Serialized detail, suitable as a response body
    pub fn to_value(&self) -> Value {
        self.detail().to_value()
    }
}

impl HttpError for ClassifiedError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_type(&self) -> &str {
        &self.detail().error_type
    }

    fn client_message(&self) -> String {
        self.detail().message.clone()
    }
}

impl From<ErrorBuilder> for ClassifiedError {
    fn from(builder: ErrorBuilder) -> Self {
        builder.build()
    }
}

/// Collects the optional inputs of an error before it is created
///
/// Nothing is logged and no trace id is assigned until
/// [`build`](Self::build) is called.
#[derive(Debug, Clone)]
#[must_use = "an error is only created and logged by `build`"]
pub struct ErrorBuilder {
    kind: Option<ErrorKind>,
    service: String,
    error_type: String,
    message: String,
    code: u16,
    severity: Severity,
    environment: Environment,
    trace_id: Option<String>,
    context: Map<String, Value>,
}

impl ErrorBuilder {
    pub(crate) fn for_kind(kind: ErrorKind, service: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            service: service.into(),
            error_type: kind.name().to_owned(),
            message: kind.default_message().to_owned(),
            code: kind.code(),
            severity: Severity::default(),
            environment: Environment::default(),
            trace_id: None,
            context: Map::new(),
        }
    }

    /// Replace the default message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Override the status code bound to the kind
    pub fn code(mut self, code: u16) -> Self {
        self.code = code;
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Reuse an existing trace id; an empty id is treated as absent
    pub fn trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Like [`trace_id`](Self::trace_id) but accepts an optional passthrough
    pub fn maybe_trace_id(mut self, trace_id: Option<impl Into<String>>) -> Self {
        self.trace_id = trace_id.map(Into::into);
        self
    }

    /// Replace the whole context map
    pub fn context(mut self, context: Map<String, Value>) -> Self {
        self.context = context;
        self
    }

    /// Add a single context entry
    pub fn context_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Create the error, stamping it and logging it once by severity
    pub fn build(self) -> ClassifiedError {
        let trace_id = self
            .trace_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let detail = ErrorDetail {
            service: self.service,
            error_type: self.error_type,
            code: self.code,
            message: self.message,
            timestamp: Timestamp::now(),
            trace_id,
            severity: self.severity,
            environment: self.environment,
            context: self.context,
        };

        logging::log_error_detail(&detail);

        ClassifiedError::from_parts(self.kind, Box::new(detail))
    }
}
