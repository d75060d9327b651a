//! Request-boundary adapter
//!
//! Handlers return `Result<T, BoundaryError>` (or run under [`guard`]) and
//! every failure leaves the service as a JSON body with a matching status
//! code. [`boundary_layer`] covers the last gap: handlers that panic.

#![allow(clippy::must_use_candidate)]

mod boundary;
mod guard;

pub use boundary::{BoundaryError, TRACE_PLACEHOLDER, UNKNOWN_SERVICE, fallback_body};
pub use guard::{PanicHandler, boundary_layer, guard};
