use super::{LlmClient, types::*};
use crate::{Error, Result, config::LlmConfig};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, ResponseFormatJsonSchema,
    },
};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use std::time::Duration;
use tracing::debug;

/// Backend for any OpenAI-compatible chat completions endpoint.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        // A failed call fails the request; the SDK would otherwise retry 429/5xx for minutes
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        let client = Client::with_config(openai_config)
            .with_http_client(http_client)
            .with_backoff(no_retry);

        Ok(Self {
            client,
            model: config.model,
        })
    }

    fn build_request(&self, request: GenerateRequest) -> Result<CreateChatCompletionRequest> {
        let mut messages: Vec<ChatCompletionRequestMessage> = Vec::new();

        if let Some(instruction) = request.system_instruction {
            let msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(ChatCompletionRequestSystemMessageContent::Text(instruction))
                .build()
                .map_err(|e| Error::llm(format!("Failed to build system message: {}", e)))?;
            messages.push(msg.into());
        }

        let msg = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Text(request.input))
            .build()
            .map_err(|e| Error::llm(format!("Failed to build user message: {}", e)))?;
        messages.push(msg.into());

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model).messages(messages);

        if let Some(temperature) = request.temperature {
            request_builder.temperature(temperature);
        }

        if let ResponseFormat::Json { name, schema } = request.response_format {
            request_builder.response_format(async_openai::types::ResponseFormat::JsonSchema {
                json_schema: ResponseFormatJsonSchema {
                    description: None,
                    name,
                    schema: Some(schema),
                    strict: Some(true),
                },
            });
        }

        Ok(request_builder.build()?)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        debug!(
            "Creating chat completion with model {} ({} chars)",
            self.model,
            request.input.len()
        );

        let openai_request = self.build_request(request)?;
        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::llm("Completion contained no choices"))?;

        let text = choice
            .message
            .content
            .filter(|content| !content.is_empty())
            .ok_or_else(|| Error::llm("Completion contained no content"))?;

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(GenerateResponse {
            text,
            model: response.model,
            finish_reason: choice.finish_reason.map(|fr| format!("{fr:?}")),
            usage,
        })
    }
}
