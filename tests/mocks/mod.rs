#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use kubeai_smoke::errors::SmokeError;
use kubeai_smoke::llm_client::InferenceApi;
use kubeai_smoke::models::chat::{ChatCompletion, ChatCompletionCreate};
use kubeai_smoke::models::completion::{Completion, CompletionCreate};
use kubeai_smoke::models::embedding::{EmbeddingCreate, EmbeddingResponse};
use kubeai_smoke::models::model_list::{Model, ModelList, ObjectType};

/// In-process API double: canned answers, recorded calls.
pub struct ScriptedApi {
    model_ids: Vec<String>,
    completion_choices: usize,
    chat_error: Option<SmokeError>,
    panic_on_embedding: Option<usize>,
    feature_calls: Mutex<Vec<Vec<String>>>,
    completion_calls: Mutex<Vec<CompletionCreate>>,
    embedding_calls: AtomicUsize,
}

impl ScriptedApi {
    pub fn new(model_ids: &[&str]) -> Self {
        Self {
            model_ids: model_ids.iter().map(|id| id.to_string()).collect(),
            completion_choices: 1,
            chat_error: None,
            panic_on_embedding: None,
            feature_calls: Mutex::new(vec![]),
            completion_calls: Mutex::new(vec![]),
            embedding_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_completion_choices(mut self, choices: usize) -> Self {
        self.completion_choices = choices;
        self
    }

    pub fn with_chat_error(mut self, error: SmokeError) -> Self {
        self.chat_error = Some(error);
        self
    }

    /// Panics inside the embedding call with the given 1-based sequence number.
    pub fn with_panic_on_embedding(mut self, call: usize) -> Self {
        self.panic_on_embedding = Some(call);
        self
    }

    pub fn feature_calls(&self) -> Vec<Vec<String>> {
        self.feature_calls.lock().unwrap().clone()
    }

    pub fn completion_calls(&self) -> Vec<CompletionCreate> {
        self.completion_calls.lock().unwrap().clone()
    }

    pub fn embedding_calls(&self) -> usize {
        self.embedding_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferenceApi for ScriptedApi {
    async fn list_models_with_features(
        &self,
        features: &[String],
    ) -> Result<ModelList, SmokeError> {
        self.feature_calls.lock().unwrap().push(features.to_vec());
        Ok(ModelList {
            object: "list".to_string(),
            data: self
                .model_ids
                .iter()
                .map(|id| Model {
                    id: id.clone(),
                    object: ObjectType::Model,
                    created: 0,
                    owned_by: "kubeai".to_string(),
                    features: vec![],
                })
                .collect(),
        })
    }

    async fn create_completion(
        &self,
        request: CompletionCreate,
    ) -> Result<Completion, SmokeError> {
        self.completion_calls.lock().unwrap().push(request.clone());
        let choices = (0..self.completion_choices)
            .map(|index| {
                serde_json::from_value(serde_json::json!({
                    "index": index,
                    "text": "fine",
                    "finish_reason": "stop"
                }))
                .unwrap()
            })
            .collect();
        Ok(Completion {
            id: "cmpl-scripted".to_string(),
            object: "text_completion".to_string(),
            created: 0,
            model: request.model,
            choices,
            usage: None,
        })
    }

    async fn create_chat_completion(
        &self,
        request: ChatCompletionCreate,
    ) -> Result<ChatCompletion, SmokeError> {
        if let Some(error) = &self.chat_error {
            return Err(error.clone());
        }
        Ok(ChatCompletion {
            id: "chatcmpl-scripted".to_string(),
            object: "chat.completion".to_string(),
            created: 0,
            model: request.model,
            choices: vec![],
            usage: None,
        })
    }

    async fn create_embedding(
        &self,
        request: EmbeddingCreate,
    ) -> Result<EmbeddingResponse, SmokeError> {
        let call = self.embedding_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.panic_on_embedding == Some(call) {
            panic!("scripted embedding panic on call {call}");
        }
        Ok(EmbeddingResponse {
            object: "list".to_string(),
            data: vec![],
            model: request.model,
            usage: None,
        })
    }
}
