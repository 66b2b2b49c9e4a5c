pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/openai/v1";
pub const DEFAULT_API_KEY: &str = "ignored-by-kubeai";
pub const DEFAULT_MODEL: &str = "opt-125m-cpu";
pub const DEFAULT_PROMPT: &str = "How are you?";
pub const DEFAULT_MAX_TOKENS: i32 = 50;

pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";
pub const DEFAULT_EMBEDDING_INPUT: &str = "Generate an embedding for me";
pub const DEFAULT_EMBEDDING_REQUESTS: usize = 60;

pub(crate) const CHAT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub(crate) const CHAT_USER_PROMPT: &str = "Hello, how are you?";

pub(crate) const CHAT_TEMPLATE_DEFECT: &str = "the model's tokenizer defines no chat template; \
     the server rejects chat completions with 400 (transformers >= 4.44 dropped the default template)";

pub(crate) const CONFIG_FILE_ENV: &str = "KUBEAI_SMOKE_CONFIG";
