use async_trait::async_trait;
use genai_gateway::{
    Error, Result,
    llm::{GenerateRequest, GenerateResponse, LlmClient},
    weather::{CurrentWeather, WeatherProvider},
};
use mockall::mock;
use std::sync::{Arc, Mutex};

/// Mock LLM client that records every request it receives
#[derive(Debug)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub requests: Arc<Mutex<Vec<GenerateRequest>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<&str>) -> Self {
        *self.responses.lock().unwrap() = responses.into_iter().map(String::from).collect();
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(GenerateResponse {
            text: responses.remove(0),
            model: "mock-model".to_string(),
            finish_reason: Some("STOP".to_string()),
            usage: None,
        })
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

mock! {
    pub Weather {}

    #[async_trait]
    impl WeatherProvider for Weather {
        async fn current(&self, city: &str) -> Result<CurrentWeather>;
    }
}
