use errorhub_core::{ClassifiedError, Environment};

use crate::policy::{UNREADABLE_BODY, classify_failure, is_success};
use crate::response::{AsyncResponse, BlockingResponse, BodyError};

/// Check a response from a blocking client
///
/// Returns the response untouched on success. Otherwise the body is read
/// and the matching classified error is returned; the body is only
/// consumed on failure.
pub fn raise_for_status_sync<R: BlockingResponse>(
    response: R,
    service_name: &str,
    environment: Environment,
    trace: Option<&str>,
) -> Result<R, ClassifiedError> {
    let status = response.status();
    if is_success(status) {
        return Ok(response);
    }

    let body = response.text().unwrap_or_else(unreadable);
    Err(classify_failure(status, body, service_name, environment, trace))
}

/// Check a response from an async client
///
/// Same policy as [`raise_for_status_sync`]. Reading the body is the only
/// suspension point; if it fails or the response cannot produce text, a
/// placeholder message is used and classification still happens.
pub async fn raise_for_status_async<R: AsyncResponse>(
    response: R,
    service_name: &str,
    environment: Environment,
    trace: Option<&str>,
) -> Result<R, ClassifiedError> {
    let status = response.status();
    if is_success(status) {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_else(unreadable);
    Err(classify_failure(status, body, service_name, environment, trace))
}

#[allow(clippy::needless_pass_by_value)]
fn unreadable(error: BodyError) -> String {
    tracing::debug!(%error, "substituting placeholder for unreadable response body");
    UNREADABLE_BODY.to_owned()
}
