use super::{GeminiClient, OpenAiClient, types::*};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}

/// Builds the client for `config.provider`.
pub fn create_llm_client(config: LlmConfig) -> Result<Arc<dyn LlmClient>> {
    info!(
        "Creating {} LLM client for model {}",
        config.provider, config.model
    );

    match config.provider.as_str() {
        "gemini" => Ok(Arc::new(GeminiClient::new(config)?)),
        "openai" => Ok(Arc::new(OpenAiClient::new(config)?)),
        other => Err(Error::config(format!("Unsupported LLM provider: {}", other))),
    }
}
