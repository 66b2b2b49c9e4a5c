use serde::{self, Deserialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Clone)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<Value>,
}

/// Error payloads seen from OpenAI-compatible servers: the OpenAI
/// `{"error": {...}}` envelope, or vLLM's flat `{"object": "error", ...}`.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum ErrorBody {
    Envelope { error: ErrorDetail },
    Flat(ErrorDetail),
}

impl ErrorBody {
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }

    pub fn detail(&self) -> &ErrorDetail {
        match self {
            ErrorBody::Envelope { error } => error,
            ErrorBody::Flat(detail) => detail,
        }
    }

    pub fn describe(&self) -> String {
        let detail = self.detail();
        match &detail.error_type {
            Some(error_type) => format!("{}: {}", error_type, detail.message),
            None => detail.message.clone(),
        }
    }
}
