mod client;
mod gemini;
mod openai;
mod types;

pub use client::{LlmClient, create_llm_client};
pub use gemini::GeminiClient;
pub use openai::OpenAiClient;
pub use types::{GenerateRequest, GenerateResponse, ResponseFormat, Usage};
