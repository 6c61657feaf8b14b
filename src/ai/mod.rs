pub mod explainer;
pub mod openai;
pub mod prompt_template;
pub mod sanitizer;

use crate::error::{NlcmdError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// 역할이 붙은 단일 메시지
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Completion 요청 (모델 + 순서가 있는 메시지 목록)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Completion {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: String,
}

impl Completion {
    /// Build a completion holding a single choice
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: ChoiceMessage {
                    content: content.into(),
                },
            }],
        }
    }

    /// 첫 번째 choice의 텍스트 (trim 적용)
    pub fn first_text(&self) -> Result<String> {
        self.choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| NlcmdError::Completion("Response contained no choices".to_string()))
    }
}

/// Completion capability: model + messages in, generated text out
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name (e.g., "openai")
    fn name(&self) -> &str;

    /// Generate a completion for the given messages
    async fn complete(&self, request: CompletionRequest) -> Result<Completion>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serialization() {
        let message = ChatMessage::system("be brief");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "be brief");
    }

    #[test]
    fn test_completion_deserialization() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "  ls -la \n"}, "finish_reason": "stop"}
            ]
        }"#;

        let completion: Completion = serde_json::from_str(body).unwrap();
        assert_eq!(completion.first_text().unwrap(), "ls -la");
    }

    #[test]
    fn test_empty_choices() {
        let completion: Completion = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(completion.first_text().is_err());
    }

    #[test]
    fn test_missing_content_defaults_to_empty() {
        let body = r#"{"choices": [{"message": {"role": "assistant"}}]}"#;
        let completion: Completion = serde_json::from_str(body).unwrap();
        assert_eq!(completion.first_text().unwrap(), "");
    }
}
