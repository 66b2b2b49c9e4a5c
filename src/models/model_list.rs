use serde::{self, Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Model,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Model {
    pub id: String,
    pub object: ObjectType,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub owned_by: String,
    /// KubeAI extension: what the model serves, e.g. `TextGeneration`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelList {
    #[serde(default = "list_object")]
    pub object: String,
    pub data: Vec<Model>,
}

fn list_object() -> String {
    "list".to_string()
}

impl ModelList {
    pub fn ids(&self) -> Vec<&str> {
        self.data.iter().map(|model| model.id.as_str()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.data.iter().any(|model| model.id == id)
    }
}

/// The listing as it comes off the wire: either the OpenAI envelope or a
/// bare array of models.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ModelListing {
    Envelope(ModelList),
    Bare(Vec<Model>),
}

impl From<ModelListing> for ModelList {
    fn from(listing: ModelListing) -> Self {
        match listing {
            ModelListing::Envelope(list) => list,
            ModelListing::Bare(data) => ModelList {
                object: list_object(),
                data,
            },
        }
    }
}
