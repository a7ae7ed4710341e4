use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    },
    Client,
};

use crate::config::ProviderConfig;
use crate::error::{CodePixError, Result};
use crate::providers::Completion;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

pub(crate) const CREDENTIAL_VAR: &str = "GROQ_API_KEY";

// Fixed sampling parameters for every completion issued through this client.
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2048;
const TOP_P: f32 = 1.0;

/// Client for Groq's OpenAI-compatible chat completion API.
#[derive(Clone)]
pub struct GroqClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GroqClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let openai_config = OpenAIConfig::new()
            .with_api_base(base_url)
            .with_api_key(config.api_key.clone());

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CodePixError::Internal(format!("Failed to create HTTP client: {e}")))?;

        // async-openai retries 5xx responses with its own exponential backoff
        // (up to 15 minutes by default). Every dispatch here is single-shot,
        // so the retry window is pinned to zero.
        let backoff = backoff::ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        let client = Client::with_config(openai_config)
            .with_http_client(http_client)
            .with_backoff(backoff);

        Ok(Self {
            client,
            model: config.model.clone(),
        })
    }

    pub async fn complete(&self, prompt: &str, model_override: Option<&str>) -> Result<Completion> {
        let model = model_override.unwrap_or(&self.model);
        let request = self.build_request(prompt, model)?;

        match self.client.chat().create(request).await {
            Ok(response) => Ok(Completion {
                text: Self::first_choice_text(response),
                model_name: model.to_string(),
            }),
            Err(error) => Err(Self::map_openai_error(error)),
        }
    }

    fn build_request(&self, prompt: &str, model: &str) -> Result<CreateChatCompletionRequest> {
        let messages = vec![ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|error| CodePixError::Validation(format!("Invalid user prompt: {error}")))?
            .into()];

        CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .top_p(TOP_P)
            .build()
            .map_err(|error| {
                CodePixError::Validation(format!("Invalid completion request: {error}"))
            })
    }

    /// The first choice's message content, verbatim. An empty completion is
    /// returned as-is; only a missing choices array is an error, and that is
    /// handled by the caller seeing an empty string here.
    fn first_choice_text(response: CreateChatCompletionResponse) -> String {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default()
    }

    fn map_openai_error(error: OpenAIError) -> CodePixError {
        match error {
            OpenAIError::Reqwest(e) => CodePixError::Upstream(format!("Groq request failed: {e}")),
            OpenAIError::ApiError(e) => CodePixError::Upstream(format!("Groq API error: {e}")),
            OpenAIError::JSONDeserialize(e) => {
                CodePixError::Upstream(format!("Failed to parse Groq response: {e}"))
            }
            other => CodePixError::Upstream(other.to_string()),
        }
    }
}
