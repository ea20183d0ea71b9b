use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Schema validation error: {0}")]
    Schema(String),

    #[error("Weather error: {0}")]
    Weather(String),

    #[error("Upstream {provider} returned status {status}")]
    UpstreamStatus { provider: &'static str, status: u16 },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    pub fn weather(msg: impl Into<String>) -> Self {
        Self::Weather(msg.into())
    }

    /// True when the failure came from a provider call rather than local setup.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Llm(_)
                | Self::Schema(_)
                | Self::Weather(_)
                | Self::UpstreamStatus { .. }
                | Self::Network(_)
                | Self::OpenAi(_)
        )
    }
}
