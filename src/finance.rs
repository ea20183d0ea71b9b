//! Beginner investment assistant: guardrail instruction, output schema and
//! local validation of the structured answer.

use crate::{
    Error, Result,
    config::FinanceConfig,
    llm::GenerateRequest,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

const SCHEMA_NAME: &str = "finance_answer";

const GUARDRAILS: &str = "You are an INVESTMENT ASSISTANT for beginners.
Explain concepts accurately and with balance, and point out risks and trade-offs.
Do not make personalized recommendations or issue buy/sell orders.
Never mention guaranteed returns. If context is missing, ask for the minimum information needed.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceAnswer {
    pub answer: String,
    pub next_steps: Vec<String>,
    pub disclaimer: String,
}

/// JSON Schema the provider output must conform to.
pub fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "answer": {"type": "string"},
            "next_steps": {
                "type": "array",
                "items": {"type": "string"}
            },
            "disclaimer": {"type": "string"}
        },
        "required": ["answer", "next_steps", "disclaimer"],
        "additionalProperties": false
    })
}

#[derive(Debug, Clone)]
pub struct FinanceProfile {
    system_instruction: String,
    temperature: f32,
}

impl FinanceProfile {
    pub fn from_config(config: &FinanceConfig) -> Self {
        Self {
            system_instruction: format!("{}\nRespond in {}.", GUARDRAILS, config.locale),
            temperature: config.temperature,
        }
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn request_for(&self, message: &str) -> GenerateRequest {
        GenerateRequest::new(message)
            .with_system_instruction(self.system_instruction.clone())
            .with_temperature(self.temperature)
            .with_json_schema(SCHEMA_NAME, response_schema())
    }
}

impl Default for FinanceProfile {
    fn default() -> Self {
        Self::from_config(&FinanceConfig::default())
    }
}

/// Validates provider output against the answer schema.
///
/// Unknown fields are dropped so the re-serialized answer carries exactly
/// `answer`, `next_steps` and `disclaimer`.
pub fn parse_answer(text: &str) -> Result<FinanceAnswer> {
    let answer: FinanceAnswer = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| Error::schema(format!("finance answer does not match schema: {}", e)))?;

    if answer.answer.trim().is_empty() {
        return Err(Error::schema("finance answer is empty"));
    }

    Ok(answer)
}

// Some OpenAI-compatible endpoints wrap JSON mode output in a markdown fence.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}
