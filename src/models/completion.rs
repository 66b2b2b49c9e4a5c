use serde::{self, Deserialize, Serialize};
use serde_json::Value;

use super::{FinishReason, Usage};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CompletionCreate {
    pub model: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_tokens: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub n: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stop: Option<Vec<String>>,
}

impl CompletionCreate {
    pub fn new(model: &str, prompt: &str, max_tokens: i32) -> Self {
        Self {
            model: model.to_string(),
            prompt: prompt.to_string(),
            max_tokens: Some(max_tokens),
            temperature: None,
            n: None,
            stop: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CompletionChoice {
    pub index: i32,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub logprobs: Option<Value>,
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Completion {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<CompletionChoice>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub usage: Option<Usage>,
}
