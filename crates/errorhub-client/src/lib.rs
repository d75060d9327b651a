//! Inbound classification of downstream responses
//!
//! After calling another service, hand the response to
//! [`raise_for_status_sync`] or [`raise_for_status_async`]. Statuses 200,
//! 201 and 202 pass; anything else comes back as the matching
//! [`ClassifiedError`](errorhub_core::ClassifiedError), keeping the exact
//! status code the downstream sent.

#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

mod policy;
mod raise;
mod response;
mod send;

pub use policy::{SUCCESS_CODES, UNREADABLE_BODY, classify_failure, is_success, kind_for_status};
pub use raise::{raise_for_status_async, raise_for_status_sync};
pub use response::{AsyncResponse, BlockingResponse, BodyError};
pub use send::ClassifiedSend;
