use crate::ai::{prompt_template::PromptTemplate, CompletionProvider};
use crate::error::Result;
use std::sync::Arc;

/// 설명 출력 라벨
pub const EXPLANATION_LABEL: &str = "Explanation: \n";

/// 명령어에 대한 단계별 설명을 요청
pub struct Explainer {
    provider: Arc<dyn CompletionProvider>,
}

impl Explainer {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// 설명 텍스트 반환 (첫 번째 choice, trim 적용)
    ///
    /// provider 에러는 그대로 전파됩니다.
    pub async fn explain(&self, command: &str, model: &str) -> Result<String> {
        let request = PromptTemplate::for_explanation(model, command);
        let completion = self.provider.complete(request).await?;
        completion.first_text()
    }
}
