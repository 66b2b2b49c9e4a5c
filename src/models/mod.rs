pub mod chat;
pub mod completion;
pub mod embedding;
pub mod error_body;
pub mod model_list;

use serde::{self, Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ToolCalls,
    Abort,
    /// Any reason this client has no name for, e.g. `content_filter`.
    #[serde(other)]
    Unknown,
}

/// Token accounting. Embedding responses omit `completion_tokens`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: i32,
    #[serde(default)]
    pub completion_tokens: i32,
    pub total_tokens: i32,
}
