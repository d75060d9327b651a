use async_trait::async_trait;

/// Why a response body could not be turned into text
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    /// The response type offers no way to read its body
    #[error("response body cannot be read as text")]
    Unsupported,

    /// Reading the body failed
    #[error("failed to read response body: {0}")]
    Read(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A received response whose body can be read without suspending
pub trait BlockingResponse: Sized {
    /// Status code as received
    fn status(&self) -> u16;

    /// Consume the response and return its body text
    fn text(self) -> Result<String, BodyError>;
}

/// A received response whose body is read asynchronously
#[async_trait]
pub trait AsyncResponse: Send + Sized {
    /// Status code as received
    fn status(&self) -> u16;

    /// Consume the response and return its body text
    async fn text(self) -> Result<String, BodyError> {
        Err(BodyError::Unsupported)
    }
}

#[async_trait]
impl AsyncResponse for reqwest::Response {
    fn status(&self) -> u16 {
        reqwest::Response::status(self).as_u16()
    }

    async fn text(self) -> Result<String, BodyError> {
        reqwest::Response::text(self)
            .await
            .map_err(|e| BodyError::Read(Box::new(e)))
    }
}

#[cfg(feature = "blocking")]
impl BlockingResponse for reqwest::blocking::Response {
    fn status(&self) -> u16 {
        reqwest::blocking::Response::status(self).as_u16()
    }

    fn text(self) -> Result<String, BodyError> {
        reqwest::blocking::Response::text(self).map_err(|e| BodyError::Read(Box::new(e)))
    }
}

impl BlockingResponse for http::Response<String> {
    fn status(&self) -> u16 {
        http::Response::status(self).as_u16()
    }

    fn text(self) -> Result<String, BodyError> {
        Ok(self.into_body())
    }
}

#[async_trait]
impl AsyncResponse for http::Response<String> {
    fn status(&self) -> u16 {
        http::Response::status(self).as_u16()
    }

    async fn text(self) -> Result<String, BodyError> {
        Ok(self.into_body())
    }
}

#[cfg(all(test, feature = "blocking"))]
mod tests {
    use errorhub_core::{Environment, ErrorKind};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::raise::raise_for_status_sync;

    // the blocking client must not run inside an async context, so the
    // mock server lives on its own runtime
    fn mock_server(runtime: &tokio::runtime::Runtime) -> MockServer {
        runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/users/7"))
                .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
                .mount(&server)
                .await;
            Mock::given(method("GET"))
                .and(path("/users/8"))
                .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\":8}"))
                .mount(&server)
                .await;
            server
        })
    }

    #[test]
    fn blocking_reqwest_responses() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let server = mock_server(&runtime);
        let client = reqwest::blocking::Client::new();

        let response = client.get(format!("{}/users/7", server.uri())).send().unwrap();
        let error = raise_for_status_sync(response, "orders", Environment::Staging, Some("t-1")).unwrap_err();
        assert_eq!(error.kind(), Some(ErrorKind::NotFound));
        assert_eq!(error.code(), 404);
        assert_eq!(error.detail().message, "missing");
        assert_eq!(error.detail().trace_id, "t-1");

        let response = client.get(format!("{}/users/8", server.uri())).send().unwrap();
        let response = raise_for_status_sync(response, "orders", Environment::Staging, None).unwrap();
        assert_eq!(response.text().unwrap(), "{\"id\":8}");
    }
}
