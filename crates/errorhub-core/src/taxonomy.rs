use http::StatusCode;

use crate::classified::ErrorBuilder;

/// Recognized error kinds, each bound to one HTTP status code
///
/// The variant name doubles as the `error_type` written into the
/// [`ErrorDetail`](crate::ErrorDetail).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum ErrorKind {
    /// Malformed client input
    BadRequest,
    /// Missing or invalid credentials
    Unauthorized,
    /// Authenticated but not allowed
    Forbidden,
    /// Requested resource does not exist
    NotFound,
    /// Request conflicts with current state
    Conflict,
    /// Well-formed input that fails validation
    UnprocessableEntity,
    /// Unexpected server-side fault
    InternalServerError,
    /// A dependency is unavailable
    ServiceUnavailable,
    /// A dependency did not answer in time
    GatewayTimeout,
}

/// One row of the taxonomy table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyEntry {
    pub kind: ErrorKind,
    pub code: u16,
    pub message: &'static str,
}

/// Process-wide taxonomy, indexed by `ErrorKind` discriminant
pub static TAXONOMY: [TaxonomyEntry; 9] = [
    TaxonomyEntry {
        kind: ErrorKind::BadRequest,
        code: 400,
        message: "Bad request",
    },
    TaxonomyEntry {
        kind: ErrorKind::Unauthorized,
        code: 401,
        message: "Unauthorized",
    },
    TaxonomyEntry {
        kind: ErrorKind::Forbidden,
        code: 403,
        message: "Forbidden",
    },
    TaxonomyEntry {
        kind: ErrorKind::NotFound,
        code: 404,
        message: "Resource not found",
    },
    TaxonomyEntry {
        kind: ErrorKind::Conflict,
        code: 409,
        message: "Conflict",
    },
    TaxonomyEntry {
        kind: ErrorKind::UnprocessableEntity,
        code: 422,
        message: "Unprocessable entity",
    },
    TaxonomyEntry {
        kind: ErrorKind::InternalServerError,
        code: 500,
        message: "Internal server error",
    },
    TaxonomyEntry {
        kind: ErrorKind::ServiceUnavailable,
        code: 503,
        message: "Service unavailable",
    },
    TaxonomyEntry {
        kind: ErrorKind::GatewayTimeout,
        code: 504,
        message: "Gateway timeout",
    },
];

impl ErrorKind {
    /// All kinds, in taxonomy order
    pub const ALL: [Self; 9] = [
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::Conflict,
        Self::UnprocessableEntity,
        Self::InternalServerError,
        Self::ServiceUnavailable,
        Self::GatewayTimeout,
    ];

    /// Taxonomy row for this kind
    pub fn entry(self) -> &'static TaxonomyEntry {
        &TAXONOMY[self as usize]
    }

    /// Bound status code
    pub fn code(self) -> u16 {
        self.entry().code
    }

    /// Bound status code as an [`http::StatusCode`]
    pub fn status_code(self) -> StatusCode {
        StatusCode::from_u16(self.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Canned message used when the caller supplies none
    pub fn default_message(self) -> &'static str {
        self.entry().message
    }

    /// Kind name as written to `error_type`
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look up the kind bound to a status code
    pub fn from_code(code: u16) -> Option<Self> {
        TAXONOMY.iter().find(|entry| entry.code == code).map(|entry| entry.kind)
    }

    /// Start building an error of this kind
    pub fn error(self, service: impl Into<String>) -> ErrorBuilder {
        ErrorBuilder::for_kind(self, service)
    }
}
