use colored::*;
use std::io::{self, Write};
use std::time::Duration;

/// 실행 결과 분류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// 프로세스가 종료됨 (exit code와 무관)
    Completed { exit_code: Option<i32> },
    /// 제한 시간 초과로 강제 종료됨
    TimedOut { after: Duration },
    /// exit code가 있는 구조화된 실패
    Failed { exit_code: i32 },
    /// 그 외 예기치 못한 실패 (spawn 실패 등)
    Errored { message: String },
}

/// 명령어 1회 실행 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub outcome: ExecutionOutcome,
}

impl ExecutionResult {
    pub fn completed(stdout: String, stderr: String, exit_code: Option<i32>) -> Self {
        Self {
            stdout,
            stderr,
            outcome: ExecutionOutcome::Completed { exit_code },
        }
    }

    pub fn timed_out(after: Duration) -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            outcome: ExecutionOutcome::TimedOut { after },
        }
    }

    pub fn failed(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            stdout,
            stderr,
            outcome: ExecutionOutcome::Failed { exit_code },
        }
    }

    pub fn errored(message: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            outcome: ExecutionOutcome::Errored {
                message: message.into(),
            },
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, ExecutionOutcome::Completed { .. })
    }

    /// 사람이 읽을 수 있는 결과 텍스트 출력
    pub fn report(&self, out: &mut dyn Write) -> io::Result<()> {
        match &self.outcome {
            ExecutionOutcome::Completed { .. } => {
                writeln!(out, "{}", "Command output:".green())?;
                writeln!(out, "{}", self.stdout)?;
                if !self.stderr.is_empty() {
                    writeln!(out, "{}", "Command error output:".yellow())?;
                    writeln!(out, "{}", self.stderr)?;
                }
            }
            ExecutionOutcome::TimedOut { after } => {
                writeln!(
                    out,
                    "{}",
                    format!("Command timed out after {} seconds", after.as_secs()).red()
                )?;
            }
            ExecutionOutcome::Failed { exit_code } => {
                writeln!(
                    out,
                    "{}",
                    format!("Command failed with return code {}", exit_code).red()
                )?;
                writeln!(out, "stderr: {}", self.stderr)?;
            }
            ExecutionOutcome::Errored { message } => {
                writeln!(
                    out,
                    "{} {}",
                    "An error occurred while running the command:".red(),
                    message
                )?;
            }
        }

        Ok(())
    }
}
