use serde_json::Value;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const API_PREFIX: &str = "/openai/v1";

pub fn api_path(endpoint: &str) -> String {
    format!("{}{}", API_PREFIX, endpoint)
}

pub async fn mount_json(
    mock_server: &MockServer,
    http_method: &str,
    endpoint: &str,
    status: u16,
    body: Value,
) {
    Mock::given(method(http_method))
        .and(path(api_path(endpoint)))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(mock_server)
        .await;
}

pub async fn setup_models_mock(body: Value) -> MockServer {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "GET", "/models", 200, body).await;
    mock_server
}

pub async fn setup_completion_mock(status: u16, body: Value) -> MockServer {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "POST", "/completions", status, body).await;
    mock_server
}

pub async fn setup_smoke_mocks(models: Value, completion: Value) -> MockServer {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "GET", "/models", 200, models).await;
    mount_json(&mock_server, "POST", "/completions", 200, completion).await;
    mock_server
}
