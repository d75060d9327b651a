//! Test server wrapper that runs the sample service on a random port

use std::net::SocketAddr;

use errorhub_config::Config;
use tokio_util::sync::CancellationToken;

use super::service;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start the sample service, pointing it at `downstream`
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config, downstream: String) -> anyhow::Result<Self> {
        let app = service::router(service::AppState::new(config.service, downstream));
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Configuration the sample service runs with
pub fn test_config() -> Config {
    Config::from_toml_str(
        r#"
        [service]
        name = "orders"
        environment = "staging"

        [telemetry]
        filter = "off"
        "#,
    )
    .expect("valid test config")
}
