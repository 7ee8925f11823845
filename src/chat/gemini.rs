//! Gemini `generateContent` client with function declarations.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use super::{ChatClient, ChatError, ModelPart};
use crate::{config::Config, tools::ToolDescriptor};

/// Chat client issuing requests directly to the Gemini REST API.
pub struct GeminiChatClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    function_call: Option<FunctionCall>,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    name: String,
    #[serde(default)]
    args: Value,
}

impl GeminiChatClient {
    /// Build a client for `model` at `base_url`.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let http = Client::builder()
            .user_agent("rustysum/chat")
            .timeout(timeout)
            .build()
            .expect("Failed to construct reqwest::Client for chat");
        Self {
            http,
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from configuration; `None` when no API key is set.
    pub fn from_config(config: &Config) -> Option<Self> {
        config.gemini_api_key.as_ref().map(|key| {
            Self::new(
                config.gemini_base_url.clone(),
                config.gemini_model.clone(),
                key.clone(),
                Duration::from_secs(config.http_timeout_secs),
            )
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

fn request_body(prompt: &str, tools: &[ToolDescriptor]) -> Value {
    let declarations: Vec<Value> = tools
        .iter()
        .map(|tool| {
            json!({
                "name": tool.name,
                "description": tool.description,
                "parameters": tool.parameters,
            })
        })
        .collect();

    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }],
        }],
        "tools": [{ "functionDeclarations": declarations }],
    })
}

fn into_parts(response: GenerateContentResponse) -> Result<Vec<ModelPart>, ChatError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ChatError::InvalidResponse("response contained no candidates".into()))?;

    let parts = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| match (part.function_call, part.text) {
            (Some(call), _) => Some(ModelPart::FunctionCall {
                name: call.name,
                args: call.args,
            }),
            (None, Some(text)) if !text.is_empty() => Some(ModelPart::Text(text)),
            _ => None,
        })
        .collect();
    Ok(parts)
}

#[async_trait]
impl ChatClient for GeminiChatClient {
    async fn generate(
        &self,
        prompt: &str,
        tools: &[ToolDescriptor],
    ) -> Result<Vec<ModelPart>, ChatError> {
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(prompt, tools))
            .send()
            .await
            .map_err(|error| {
                ChatError::RequestFailed(format!(
                    "failed to reach Gemini at {}: {error}",
                    self.base_url
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::RequestFailed(format!(
                "Gemini returned {status}: {body}"
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|error| {
            ChatError::InvalidResponse(format!("failed to decode Gemini response: {error}"))
        })?;
        into_parts(body)
    }
}
