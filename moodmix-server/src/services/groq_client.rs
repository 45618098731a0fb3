//! Chat completions client (Groq, OpenAI-compatible)
//!
//! Sends a single user-role prompt asking for a JSON array of 5 songs and
//! returns the first choice's message text untouched. Making sense of that
//! text is the reconciler's job.

use async_trait::async_trait;
use moodmix_common::config::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::generator::{GenerationError, PlaylistGenerator};

const USER_AGENT: &str = concat!("moodmix/", env!("CARGO_PKG_VERSION"));

/// Chat completions request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// One chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Chat completions response (only the fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Build the playlist prompt for a mood/genre pair
///
/// Mood and genre are embedded exactly as the caller supplied them.
pub fn build_prompt(mood: &str, genre: &str) -> String {
    let example = r#"{"title": "Song Name", "artist": "Artist Name", "description": "Brief description"}"#;
    let rows = vec![format!("  {}", example); 5].join(",\n");

    format!(
        "Generate a JSON array of exactly 5 {genre} songs that match a {mood} mood.\n\
         \n\
         Use this EXACT format:\n\
         [\n{rows}\n]\n\
         \n\
         Return ONLY the JSON array, nothing else."
    )
}

/// Text of the first choice, if any
pub fn first_choice_content(response: ChatResponse) -> Result<String, GenerationError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(GenerationError::EmptyResponse)
}

/// Chat completions API client
pub struct GroqClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqClient {
    pub fn new(config: &GeneratorConfig, api_key: String) -> Result<Self, GenerationError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body(&self, prompt: String) -> ChatRequest {
        ChatRequest {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl PlaylistGenerator for GroqClient {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn generate(&self, mood: &str, genre: &str) -> Result<String, GenerationError> {
        let body = self.request_body(build_prompt(mood, genre));

        tracing::debug!(model = %self.model, url = %self.endpoint, "Querying chat completions API");

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::NetworkError(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::ApiError(status.as_u16(), error_text));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::ParseError(e.to_string()))?;

        first_choice_content(completion)
    }
}
