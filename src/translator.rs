//! Natural language → shell command pipeline
//!
//! ```text
//! request → sanitize → sudo prefix → report → (explain) → (confirm) → (execute)
//! ```
//!
//! Every collaborator (completion provider, confirmation gate, executor and
//! output sink) is injected, so the whole flow runs against test doubles.

use crate::ai::explainer::{Explainer, EXPLANATION_LABEL};
use crate::ai::prompt_template::PromptTemplate;
use crate::ai::sanitizer::{add_privilege_prefix, strip_artifacts};
use crate::ai::CompletionProvider;
use crate::error::{NlcmdError, Result};
use crate::executor::CommandExecutor;
use crate::ui::{create_spinner, Confirm};
use colored::*;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// 번역 결과 출력 라벨
pub const TRANSLATED_LABEL: &str = "Translated command: ";

/// 1회 호출 단위의 번역 요청 (생성 후 불변)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    query: String,
    model: String,
    explain: bool,
    trust: bool,
    sudo: bool,
    timeout_secs: u64,
}

impl TranslationRequest {
    /// 요청 생성. `timeout_secs`는 1 이상이어야 함
    pub fn new(query: impl Into<String>, model: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        if timeout_secs == 0 {
            return Err(NlcmdError::ConfigError(
                "timeout must be a positive number of seconds".to_string(),
            ));
        }

        Ok(Self {
            query: query.into(),
            model: model.into(),
            explain: false,
            trust: false,
            sudo: false,
            timeout_secs,
        })
    }

    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    pub fn with_trust(mut self, trust: bool) -> Self {
        self.trust = trust;
        self
    }

    pub fn with_sudo(mut self, sudo: bool) -> Self {
        self.sudo = sudo;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn explain(&self) -> bool {
        self.explain
    }

    pub fn trust(&self) -> bool {
        self.trust
    }

    pub fn sudo(&self) -> bool {
        self.sudo
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub struct Translator<W> {
    provider: Arc<dyn CompletionProvider>,
    explainer: Explainer,
    executor: Box<dyn CommandExecutor>,
    gate: Box<dyn Confirm>,
    out: W,
    /// AI 응답 대기 중 스피너 표시 여부
    progress: bool,
}

impl<W: Write> Translator<W> {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        executor: Box<dyn CommandExecutor>,
        gate: Box<dyn Confirm>,
        out: W,
    ) -> Self {
        Self {
            explainer: Explainer::new(Arc::clone(&provider)),
            provider,
            executor,
            gate,
            out,
            progress: false,
        }
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// 자연어 요청을 명령어로 변환하고, 필요하면 설명/확인/실행까지 진행
    ///
    /// 반환값은 실행 여부와 관계없이 최종 명령어입니다. completion 실패(번역, 설명 모두)는
    /// 에러로 전파되고, 실행 단계의 실패는 출력으로만 보고됩니다.
    pub async fn translate(&mut self, request: &TranslationRequest) -> Result<String> {
        tracing::debug!(provider = self.provider.name(), model = request.model(), "translating query");

        let raw = self.request_command(request).await?;

        let mut command = strip_artifacts(&raw);
        if request.sudo() {
            command = add_privilege_prefix(&command);
        }

        writeln!(self.out, "{}{}", TRANSLATED_LABEL.cyan().bold(), command)?;

        if request.explain() {
            let explanation = self.request_explanation(&command, request.model()).await?;
            writeln!(self.out, "{}{}", EXPLANATION_LABEL.cyan().bold(), explanation)?;
        }

        self.out.flush()?;

        let approved = request.trust() || self.gate.confirm(&command)?;
        if !approved {
            tracing::debug!("execution declined");
            return Ok(command);
        }

        let result = self.executor.execute(&command, request.timeout()).await;
        result.report(&mut self.out)?;
        self.out.flush()?;

        Ok(command)
    }

    async fn request_command(&self, request: &TranslationRequest) -> Result<String> {
        let spinner = self.progress.then(|| create_spinner("Translating..."));
        let completion = self
            .provider
            .complete(PromptTemplate::for_translation(request.model(), request.query()))
            .await;

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        completion?.first_text()
    }

    async fn request_explanation(&self, command: &str, model: &str) -> Result<String> {
        let spinner = self.progress.then(|| create_spinner("Explaining..."));
        let explanation = self.explainer.explain(command, model).await;

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        explanation
    }
}
