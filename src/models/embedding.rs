use serde::{self, Deserialize, Serialize};

use super::Usage;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EmbeddingCreate {
    pub model: String,
    pub input: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Embedding {
    pub index: i32,
    pub embedding: Vec<f32>,
    #[serde(default)]
    pub object: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EmbeddingResponse {
    #[serde(default)]
    pub object: String,
    pub data: Vec<Embedding>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub usage: Option<Usage>,
}
