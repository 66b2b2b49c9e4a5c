use serde::{self, Deserialize, Serialize};

use super::{FinishReason, Usage};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MessageSystemUser {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MessageAssistant {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Message {
    System(MessageSystemUser),
    User(MessageSystemUser),
    Assistant(MessageAssistant),
}

impl Message {
    pub fn system(content: &str) -> Self {
        Message::System(MessageSystemUser {
            content: content.to_string(),
        })
    }

    pub fn user(content: &str) -> Self {
        Message::User(MessageSystemUser {
            content: content.to_string(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatCompletionCreate {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_tokens: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatChoice {
    pub index: i32,
    pub message: MessageAssistant,
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatCompletion {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChatChoice>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub usage: Option<Usage>,
}
