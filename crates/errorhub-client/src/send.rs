use async_trait::async_trait;
use errorhub_core::{ClassifiedError, ErrorKind, ServiceIdentity, Severity};

use crate::raise::raise_for_status_async;

/// Send a request and classify every way it can fail
///
/// Transport failures have no status to inspect, so they are mapped by
/// cause: timeouts to `GatewayTimeout`, connection failures to
/// `ServiceUnavailable`, anything else to `InternalServerError`. Responses
/// go through [`raise_for_status_async`].
#[async_trait]
pub trait ClassifiedSend {
    async fn send_classified(
        self,
        identity: &ServiceIdentity,
        trace: Option<&str>,
    ) -> Result<reqwest::Response, ClassifiedError>;
}

#[async_trait]
impl ClassifiedSend for reqwest::RequestBuilder {
    async fn send_classified(
        self,
        identity: &ServiceIdentity,
        trace: Option<&str>,
    ) -> Result<reqwest::Response, ClassifiedError> {
        let response = match self.send().await {
            Ok(response) => response,
            Err(error) => return Err(transport_failure(&error, identity, trace)),
        };

        raise_for_status_async(response, &identity.name, identity.environment, trace).await
    }
}

fn transport_failure(error: &reqwest::Error, identity: &ServiceIdentity, trace: Option<&str>) -> ClassifiedError {
    let kind = if error.is_timeout() {
        ErrorKind::GatewayTimeout
    } else if error.is_connect() {
        ErrorKind::ServiceUnavailable
    } else {
        ErrorKind::InternalServerError
    };

    let mut builder = identity
        .error(kind)
        .message(error.to_string())
        .severity(Severity::Medium)
        .maybe_trace_id(trace);

    if let Some(url) = error.url() {
        builder = builder.context_value("url", url.as_str());
    }

    builder.build()
}
