pub mod config;
pub mod consts;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod smoke;
