use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::errors::SmokeError;
use crate::models::chat::{ChatCompletion, ChatCompletionCreate};
use crate::models::completion::{Completion, CompletionCreate};
use crate::models::embedding::{EmbeddingCreate, EmbeddingResponse};
use crate::models::error_body::ErrorBody;
use crate::models::model_list::{ModelList, ModelListing};

/// The slice of the OpenAI-compatible API the smoke scenarios exercise.
#[async_trait]
pub trait InferenceApi: Send + Sync {
    async fn list_models_with_features(&self, features: &[String])
    -> Result<ModelList, SmokeError>;

    async fn list_models(&self) -> Result<ModelList, SmokeError> {
        self.list_models_with_features(&[]).await
    }

    async fn create_completion(&self, request: CompletionCreate)
    -> Result<Completion, SmokeError>;

    async fn create_chat_completion(
        &self,
        request: ChatCompletionCreate,
    ) -> Result<ChatCompletion, SmokeError>;

    async fn create_embedding(
        &self,
        request: EmbeddingCreate,
    ) -> Result<EmbeddingResponse, SmokeError>;
}

#[derive(Clone)]
pub struct InferenceClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl InferenceClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, SmokeError> {
        let response = request
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            log::debug!("error response: status {status}, text {text}");

            let message = ErrorBody::parse(&text)
                .map(|body| body.describe())
                .unwrap_or(text);
            return Err(SmokeError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| SmokeError::ParseError(format!("{e}, body: {text}")))
    }
}

#[async_trait]
impl InferenceApi for InferenceClient {
    async fn list_models_with_features(
        &self,
        features: &[String],
    ) -> Result<ModelList, SmokeError> {
        let query: Vec<(&str, &str)> = features
            .iter()
            .map(|feature| ("feature", feature.as_str()))
            .collect();
        let request = self.client.get(self.endpoint("/models")).query(&query);

        let listing: ModelListing = self.send(request).await?;
        Ok(listing.into())
    }

    async fn create_completion(
        &self,
        request: CompletionCreate,
    ) -> Result<Completion, SmokeError> {
        let request = self.client.post(self.endpoint("/completions")).json(&request);
        self.send(request).await
    }

    async fn create_chat_completion(
        &self,
        request: ChatCompletionCreate,
    ) -> Result<ChatCompletion, SmokeError> {
        let request = self
            .client
            .post(self.endpoint("/chat/completions"))
            .json(&request);
        self.send(request).await
    }

    async fn create_embedding(
        &self,
        request: EmbeddingCreate,
    ) -> Result<EmbeddingResponse, SmokeError> {
        let request = self.client.post(self.endpoint("/embeddings")).json(&request);
        self.send(request).await
    }
}
