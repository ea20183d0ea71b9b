use serde::{Deserialize, Serialize};

/// Shape the provider is asked to produce.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResponseFormat {
    #[default]
    Text,
    /// JSON output constrained to `schema` (a JSON Schema object).
    Json {
        name: String,
        schema: serde_json::Value,
    },
}

#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub input: String,
    pub system_instruction: Option<String>,
    pub temperature: Option<f32>,
    pub response_format: ResponseFormat,
}

impl GenerateRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_json_schema(mut self, name: impl Into<String>, schema: serde_json::Value) -> Self {
        self.response_format = ResponseFormat::Json {
            name: name.into(),
            schema,
        };
        self
    }
}

#[derive(Debug, Clone)]
pub struct GenerateResponse {
    pub text: String,
    pub model: String,
    pub finish_reason: Option<String>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
