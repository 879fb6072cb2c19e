use crate::types::{AgentError, Result};
use std::env;
use std::path::PathBuf;

/// Default chat model, matching the OpenAI completion endpoint.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default memory store file, relative to the working directory.
pub const DEFAULT_MEMORY_FILE: &str = "memories.txt";

/// Startup configuration, loaded once from the environment.
///
/// The credential is passed explicitly into the LLM client constructor;
/// nothing in the core loop reads the environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub memory_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| AgentError::Config("OPENAI_API_KEY is not set".to_string()))?;

        Ok(Config {
            api_key,
            api_base: env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            model: env::var("MNEMO_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            memory_file: env::var("MNEMO_MEMORY_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_MEMORY_FILE)),
        })
    }
}
