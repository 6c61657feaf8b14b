//! OpenAI chat-completions client
//!
//! `POST {base_url}/chat/completions` with a bearer token. Only the fields the
//! pipeline needs are decoded; everything else in the response is ignored.

use crate::ai::{Completion, CompletionProvider, CompletionRequest};
use crate::error::{NlcmdError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// API key 환경 변수 이름
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// base URL override 환경 변수 이름
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a provider from the environment
    ///
    /// Required: OPENAI_API_KEY
    /// Optional: OPENAI_BASE_URL (falls back to `default_base_url`)
    pub fn from_env(default_base_url: &str) -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| NlcmdError::MissingCredential(API_KEY_VAR.to_string()))?;

        let base_url = std::env::var(BASE_URL_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| default_base_url.to_string());

        Ok(Self::new(api_key, base_url))
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

/// 응답 본문을 `Completion`으로 디코딩
pub fn parse_completion(body: &str) -> Result<Completion> {
    Ok(serde_json::from_str(body)?)
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<Completion> {
        tracing::debug!(model = %request.model, messages = request.messages.len(), "sending completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| NlcmdError::Completion(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(NlcmdError::Completion(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| NlcmdError::Completion(e.to_string()))?;
        let completion = parse_completion(&body)?;

        tracing::debug!(choices = completion.choices.len(), "completion received");

        Ok(completion)
    }
}
