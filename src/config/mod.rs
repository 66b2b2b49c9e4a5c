use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::SmokeError;
use crate::smoke::Scenario;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EmbeddingLoadConfig {
    pub model: String,
    pub input: String,
    pub requests: usize,
}

impl Default for EmbeddingLoadConfig {
    fn default() -> Self {
        Self {
            model: consts::DEFAULT_EMBEDDING_MODEL.to_string(),
            input: consts::DEFAULT_EMBEDDING_INPUT.to_string(),
            requests: consts::DEFAULT_EMBEDDING_REQUESTS,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SmokeConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub prompt: String,
    pub max_tokens: i32,
    pub embedding: EmbeddingLoadConfig,
    pub features: Vec<String>,
    pub scenarios: Vec<Scenario>,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            base_url: consts::DEFAULT_BASE_URL.to_string(),
            api_key: consts::DEFAULT_API_KEY.to_string(),
            model: consts::DEFAULT_MODEL.to_string(),
            prompt: consts::DEFAULT_PROMPT.to_string(),
            max_tokens: consts::DEFAULT_MAX_TOKENS,
            embedding: EmbeddingLoadConfig::default(),
            features: vec![],
            scenarios: Scenario::defaults().to_vec(),
        }
    }
}

impl SmokeConfig {
    pub fn validate(&self) -> Result<(), SmokeError> {
        if self.base_url.trim().is_empty() {
            return Err(SmokeError::ConfigError("base_url is empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(SmokeError::ConfigError("model is empty".to_string()));
        }
        if self.max_tokens <= 0 {
            return Err(SmokeError::ConfigError(format!(
                "max_tokens must be positive, got {}",
                self.max_tokens
            )));
        }
        if self.scenarios.is_empty() {
            return Err(SmokeError::ConfigError("no scenarios selected".to_string()));
        }
        if self.embedding.requests == 0 {
            return Err(SmokeError::ConfigError(
                "embedding.requests must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<SmokeConfig, SmokeError>;
}

/// Reads `KUBEAI_SMOKE_CONFIG` (a JSON file) when set, then applies
/// `KUBEAI_*` environment overrides.
pub struct FileConfigLoader;

impl FileConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self) -> Result<SmokeConfig, SmokeError> {
        let mut config = match std::env::var(consts::CONFIG_FILE_ENV) {
            Ok(config_file) => read_config_file(&config_file)?,
            Err(_) => SmokeConfig::default(),
        };
        apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }
}

pub struct InMemoryConfigLoader {
    config: SmokeConfig,
}

impl InMemoryConfigLoader {
    pub fn new(config: SmokeConfig) -> Self {
        Self { config }
    }
}

impl ConfigLoader for InMemoryConfigLoader {
    fn load_config(&self) -> Result<SmokeConfig, SmokeError> {
        self.config.validate()?;
        Ok(self.config.clone())
    }
}

pub fn read_config_file(path: impl AsRef<Path>) -> Result<SmokeConfig, SmokeError> {
    let config_str = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        SmokeError::ConfigError(format!("{}: {}", path.as_ref().display(), e))
    })?;
    let config: SmokeConfig = serde_json::from_str(&config_str)
        .map_err(|e| SmokeError::ConfigError(format!("{}: {}", path.as_ref().display(), e)))?;
    Ok(config)
}

pub fn apply_env_overrides<F>(config: &mut SmokeConfig, lookup: F) -> Result<(), SmokeError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = lookup("KUBEAI_BASE_URL") {
        config.base_url = base_url;
    }
    if let Some(api_key) = lookup("KUBEAI_API_KEY") {
        config.api_key = api_key;
    }
    if let Some(model) = lookup("KUBEAI_MODEL") {
        config.model = model;
    }
    if let Some(prompt) = lookup("KUBEAI_PROMPT") {
        config.prompt = prompt;
    }
    if let Some(max_tokens) = lookup("KUBEAI_MAX_TOKENS") {
        config.max_tokens = parse_number("KUBEAI_MAX_TOKENS", &max_tokens)?;
    }
    if let Some(model) = lookup("KUBEAI_EMBEDDING_MODEL") {
        config.embedding.model = model;
    }
    if let Some(input) = lookup("KUBEAI_EMBEDDING_INPUT") {
        config.embedding.input = input;
    }
    if let Some(requests) = lookup("KUBEAI_EMBEDDING_REQUESTS") {
        config.embedding.requests = parse_number("KUBEAI_EMBEDDING_REQUESTS", &requests)?;
    }
    if let Some(features) = lookup("KUBEAI_MODEL_FEATURES") {
        config.features = split_list(&features).map(str::to_string).collect();
    }
    if let Some(scenarios) = lookup("KUBEAI_SMOKE_SCENARIOS") {
        config.scenarios = split_list(&scenarios)
            .map(Scenario::from_str)
            .collect::<Result<Vec<_>, _>>()?;
    }
    Ok(())
}

pub fn load_config() -> Result<SmokeConfig, SmokeError> {
    let loader = FileConfigLoader::new();
    loader.load_config()
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T, SmokeError> {
    value
        .trim()
        .parse()
        .map_err(|_| SmokeError::ConfigError(format!("{}: not a number: {:?}", key, value)))
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}
