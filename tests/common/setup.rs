use reqwest::Client;
use wiremock::MockServer;

use kubeai_smoke::config::SmokeConfig;
use kubeai_smoke::llm_client::InferenceClient;
use kubeai_smoke::smoke::SmokeRunner;

use super::mock_server::API_PREFIX;

pub fn base_url(mock_server: &MockServer) -> String {
    format!("{}{}", mock_server.uri(), API_PREFIX)
}

pub fn create_test_config(mock_server: &MockServer) -> SmokeConfig {
    SmokeConfig {
        base_url: base_url(mock_server),
        ..SmokeConfig::default()
    }
}

pub fn create_client(mock_server: &MockServer) -> InferenceClient {
    InferenceClient::new(Client::new(), &base_url(mock_server), "ignored-by-kubeai")
}

pub fn create_runner(config: SmokeConfig) -> SmokeRunner<InferenceClient> {
    SmokeRunner::from_config(config)
}
