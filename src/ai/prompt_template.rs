use crate::ai::{ChatMessage, CompletionRequest};

/// 명령어 생성용 system 프롬프트
pub const TRANSLATION_SYSTEM_PROMPT: &str = "Please provide a Linux command that accomplishes the following task: \
\"Write a Linux command to achieve the following Natural Language command. \
You must reply with only the linux command. Nothing else!\" \
Ensure your response consists solely of the Linux command required to fulfill the task.";

/// 명령어 설명용 system 프롬프트
pub const EXPLANATION_SYSTEM_PROMPT: &str = "Give a clear step-by-step explanation of what this command does, \
labelling logical steps as 1, 2, etc";

/// Completion 요청 템플릿 생성기
///
/// 모든 요청이 `[system, user]` 두 메시지 형식을 따르도록 한곳에서 관리합니다.
pub struct PromptTemplate;

impl PromptTemplate {
    /// system 지시문 + 사용자 입력으로 요청 생성
    ///
    /// # Examples
    /// ```
    /// use nlcmd::ai::prompt_template::PromptTemplate;
    ///
    /// let request = PromptTemplate::build("gpt-3.5-turbo", "be terse", "list files");
    /// assert_eq!(request.messages.len(), 2);
    /// assert_eq!(request.messages[1].content, "list files");
    /// ```
    pub fn build(model: &str, system: &str, user: &str) -> CompletionRequest {
        CompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
        }
    }

    /// 자연어 작업 → Linux 명령어 요청
    pub fn for_translation(model: &str, query: &str) -> CompletionRequest {
        Self::build(model, TRANSLATION_SYSTEM_PROMPT, query)
    }

    /// 명령어 → 단계별 설명 요청
    pub fn for_explanation(model: &str, command: &str) -> CompletionRequest {
        Self::build(model, EXPLANATION_SYSTEM_PROMPT, command)
    }
}
