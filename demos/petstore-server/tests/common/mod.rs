#![allow(dead_code, missing_docs, clippy::expect_used)]

use std::net::SocketAddr;

use anyhow::Context;
use rstest::fixture;
use tokio::task::JoinHandle;
use tracing::info;

use petstore_client::ApiClient;
use petstore_server::{BASE_PATH, ExampleDelegate, launch};

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

/// The example server on an ephemeral port, with a client pointing at it.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: ApiClient,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestApp {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("binding test listener")?;
        let addr = listener.local_addr().context("reading local address")?;
        info!(%addr, "launching server");
        let handle = tokio::spawn(launch(listener, ExampleDelegate));

        let client = ApiClient::builder()
            .with_base_url(&format!("http://{addr}{BASE_PATH}"))?
            .with_api_key("special-key")
            .build()?;

        Ok(Self {
            addr,
            client,
            handle,
        })
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[fixture]
pub async fn app() -> TestApp {
    init_tracing();
    match TestApp::start().await {
        Ok(app) => app,
        Err(error) => {
            panic!("fail to start test app: {error:?}");
        }
    }
}
