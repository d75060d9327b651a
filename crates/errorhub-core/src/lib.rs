//! Canonical error model for errorhub
//!
//! Every failure a service reports is normalized into an [`ErrorDetail`]
//! carried by a [`ClassifiedError`]. Errors are built through the fixed
//! [`ErrorKind`] taxonomy (or the generic builder) and logged at
//! construction according to their [`Severity`].

#![allow(clippy::must_use_candidate)]

mod classified;
mod error;
mod identity;
pub mod logging;
mod model;
mod taxonomy;

pub use classified::{ClassifiedError, ErrorBuilder};
pub use error::HttpError;
pub use identity::ServiceIdentity;
pub use model::{Environment, ErrorDetail, Severity};
pub use taxonomy::{ErrorKind, TAXONOMY, TaxonomyEntry};
