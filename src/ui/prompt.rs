use crate::error::{NlcmdError, Result};
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

/// 실행 확인 프롬프트 문구 (dialoguer가 ": "를 붙임)
pub const CONFIRM_PROMPT: &str = "Run command? (Y/N)";

/// 명령어 실행 전 승인 게이트
pub trait Confirm {
    /// `true`면 실행 진행
    fn confirm(&mut self, command: &str) -> Result<bool>;
}

/// 응답이 승인(`y`)인지 판정 (trim, 대소문자 무시)
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// 터미널에서 한 줄 입력을 받는 프롬프트
///
/// stdin이 터미널이 아니면 (파이프 입력 등) 일반 라인 읽기로 대체합니다.
pub struct ConsolePrompt;

impl ConsolePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirm for ConsolePrompt {
    fn confirm(&mut self, command: &str) -> Result<bool> {
        if !io::stdin().is_terminal() {
            let stdin = io::stdin();
            return ReaderPrompt::new(stdin.lock(), io::stdout()).confirm(command);
        }

        let answer: String = Input::new()
            .with_prompt(CONFIRM_PROMPT)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| NlcmdError::PromptError(e.to_string()))?;

        Ok(is_affirmative(&answer))
    }
}

/// 임의의 reader에서 응답을 읽는 프롬프트
pub struct ReaderPrompt<R, W> {
    reader: R,
    out: W,
}

impl<R: BufRead, W: Write> ReaderPrompt<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }
}

impl<R: BufRead, W: Write> Confirm for ReaderPrompt<R, W> {
    fn confirm(&mut self, _command: &str) -> Result<bool> {
        write!(self.out, "{}: ", CONFIRM_PROMPT)?;
        self.out.flush()?;

        let mut answer = String::new();
        self.reader.read_line(&mut answer)?;

        Ok(is_affirmative(&answer))
    }
}
