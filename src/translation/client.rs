use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::prompt::build_prompt;
use crate::config::ApiKey;
use crate::error::AppError;

/// Base URL of the OpenAI API.
pub const OPENAI_ENDPOINT: &str = "https://api.openai.com";
/// Chat model used for translations.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-0125";

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: ApiKey,
}

impl TranslationClient {
    /// Creates a client for `endpoint` whose requests time out after `timeout`.
    pub fn new(endpoint: String, api_key: ApiKey, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| AppError::Network {
                url: endpoint.clone(),
                source,
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Sends one chat completion request and returns the first choice's content.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, AppError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let chat_request = ChatCompletionRequest {
            model: DEFAULT_MODEL,
            messages: vec![Message {
                role: "user",
                content: build_prompt(
                    &request.text,
                    &request.target_language,
                    request.context.as_deref(),
                ),
            }],
            temperature: 0.0,
        };

        let body = serde_json::to_vec(&chat_request).map_err(AppError::Serialization)?;

        tracing::debug!(
            url = %url,
            model = DEFAULT_MODEL,
            target_language = %request.target_language,
            text_len = request.text.len(),
            "sending translation request"
        );

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key.expose()))
            .body(body)
            .send()
            .await
            .map_err(|source| AppError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");

        if status != reqwest::StatusCode::OK {
            return Err(AppError::Upstream {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| AppError::Network { url, source })?;

        parse_completion(&bytes)
    }
}

fn parse_completion(body: &[u8]) -> Result<String, AppError> {
    let completion: ChatCompletionResponse =
        serde_json::from_slice(body).map_err(AppError::ResponseParse)?;

    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(AppError::EmptyChoices)
}
