//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use cafe_directory::config::CafeConfig;
use cafe_directory::{CafeServer, CityDirectory, Shutdown};
use tokio::net::TcpListener;

/// A running server on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::with_directory(CityDirectory::builtin()).await
    }

    pub async fn with_directory(directory: CityDirectory) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let shutdown = Shutdown::new();
        let server = CafeServer::new(&CafeConfig::default(), Arc::new(directory));
        let server_shutdown = shutdown.subscribe();
        tokio::spawn(async move {
            let _ = server.run(listener, server_shutdown).await;
        });

        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        Self { addr, shutdown, client }
    }

    /// GET /cafe with the given query pairs; returns status and body.
    pub async fn cafe(&self, query: &[(&str, &str)]) -> (u16, String) {
        let res = self
            .client
            .get(format!("http://{}/cafe", self.addr))
            .query(query)
            .send()
            .await
            .expect("server unreachable");
        let status = res.status().as_u16();
        (status, res.text().await.unwrap())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Split a success body into café names. Empty body → no cafés.
#[allow(dead_code)]
pub fn split(body: &str) -> Vec<&str> {
    if body.is_empty() {
        Vec::new()
    } else {
        body.split(',').collect()
    }
}
