mod cli;

use std::sync::Arc;

use rstest::*;
use serde_json::{Value, json};
use wiremock::MockServer;

use crate::config::ApiConfig;
use crate::container::Container;

pub struct TestContext {
    pub server: MockServer,
    pub container: Arc<Container>,
}

#[fixture]
async fn context() -> TestContext {
    let server = MockServer::start().await;

    let api = ApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    };

    let container = Arc::new(Container::new(&api).unwrap());

    TestContext { server, container }
}

fn account_body() -> Value {
    json!({
        "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9",
        "name": "Test Account"
    })
}
