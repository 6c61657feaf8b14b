use crate::executor::{process_tree, CommandExecutor, ExecutionResult};
use async_trait::async_trait;
use std::io;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};

/// shell을 통해 명령어를 실행하는 기본 executor
pub struct ShellRunner {
    /// `-c`로 명령어를 넘길 shell
    shell: String,
    /// 0이 아닌 exit code를 `Failed`로 분류할지 여부
    fail_on_nonzero: bool,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            fail_on_nonzero: false,
        }
    }

    pub fn with_fail_on_nonzero(mut self, enabled: bool) -> Self {
        self.fail_on_nonzero = enabled;
        self
    }

    async fn run(&self, command: &str, timeout: Duration) -> ExecutionResult {
        let mut child = match Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
        {
            Ok(child) => child,
            Err(e) => return ExecutionResult::errored(e.to_string()),
        };

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // 출력 수집과 종료 대기를 함께 제한 시간 안에서 진행
        let collected = tokio::time::timeout(timeout, async {
            tokio::try_join!(read_stream(stdout), read_stream(stderr), child.wait())
        })
        .await;

        match collected {
            Ok(Ok((out, err, status))) => {
                let stdout = String::from_utf8_lossy(&out).into_owned();
                let stderr = String::from_utf8_lossy(&err).into_owned();

                match status.code() {
                    Some(code) if self.fail_on_nonzero && code != 0 => {
                        ExecutionResult::failed(code, stdout, stderr)
                    }
                    code => ExecutionResult::completed(stdout, stderr, code),
                }
            }
            Ok(Err(e)) => {
                terminate(&mut child).await;
                ExecutionResult::errored(e.to_string())
            }
            Err(_) => {
                terminate(&mut child).await;
                ExecutionResult::timed_out(timeout)
            }
        }
    }
}

/// shell과 shell이 fork한 모든 프로세스를 강제 종료
async fn terminate(child: &mut Child) {
    // shell이 살아 있는 동안 트리를 먼저 수집
    let tree = child.id().map(process_tree::descendants).unwrap_or_default();

    // kill()은 SIGKILL 후 reap까지 대기
    if let Err(e) = child.kill().await {
        tracing::warn!(error = %e, "failed to kill timed out command");
    }

    process_tree::kill_all(&tree);
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new("sh")
    }
}

async fn read_stream<R: AsyncRead + Unpin>(stream: Option<R>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        stream.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

#[async_trait]
impl CommandExecutor for ShellRunner {
    async fn execute(&self, command: &str, timeout: Duration) -> ExecutionResult {
        tracing::debug!(shell = %self.shell, command, timeout_secs = timeout.as_secs(), "executing command");

        let result = self.run(command, timeout).await;

        if !result.is_completed() {
            tracing::warn!(outcome = ?result.outcome, "command did not complete");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::ExecutionOutcome;
    use std::time::Instant;

    const TIMEOUT: Duration = Duration::from_secs(10);

    #[tokio::test]
    async fn test_execute_success() {
        let runner = ShellRunner::default();
        let result = runner.execute("echo hello", TIMEOUT).await;

        assert_eq!(result.outcome, ExecutionOutcome::Completed { exit_code: Some(0) });
        assert_eq!(result.stdout, "hello\n");
        assert!(result.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_shell_operators() {
        let runner = ShellRunner::default();
        let result = runner
            .execute("printf 'b\\na\\n' | sort && echo done >&2", TIMEOUT)
            .await;

        assert!(result.is_completed());
        assert_eq!(result.stdout, "a\nb\n");
        assert_eq!(result.stderr, "done\n");
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_completed_by_default() {
        let runner = ShellRunner::default();
        let result = runner.execute("echo oops >&2; exit 3", TIMEOUT).await;

        assert_eq!(result.outcome, ExecutionOutcome::Completed { exit_code: Some(3) });
        assert_eq!(result.stderr, "oops\n");
    }

    #[tokio::test]
    async fn test_nonzero_exit_fails_when_enabled() {
        let runner = ShellRunner::default().with_fail_on_nonzero(true);
        let result = runner.execute("echo oops >&2; exit 3", TIMEOUT).await;

        assert_eq!(result.outcome, ExecutionOutcome::Failed { exit_code: 3 });
        assert_eq!(result.stderr, "oops\n");
    }

    #[tokio::test]
    async fn test_zero_exit_with_fail_on_nonzero() {
        let runner = ShellRunner::default().with_fail_on_nonzero(true);
        let result = runner.execute("true", TIMEOUT).await;

        assert!(result.is_completed());
    }

    #[tokio::test]
    async fn test_missing_shell_is_errored() {
        let runner = ShellRunner::new("/nonexistent/shell-for-nlcmd-tests");
        let result = runner.execute("ls", TIMEOUT).await;

        assert!(matches!(result.outcome, ExecutionOutcome::Errored { .. }));
    }

    /// 명령줄에 `pattern`이 포함된 살아 있는 프로세스
    fn live_processes(pattern: &str) -> Vec<u32> {
        let mut system = sysinfo::System::new();
        system.refresh_processes();
        system
            .processes()
            .iter()
            .filter(|(_, p)| p.status() != sysinfo::ProcessStatus::Zombie)
            .filter(|(_, p)| p.cmd().join(" ").contains(pattern))
            .map(|(pid, _)| pid.as_u32())
            .collect()
    }

    #[tokio::test]
    async fn test_timeout_kills_and_chain() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("finished");
        let command = format!("sleep 41.393 && touch '{}'", marker.display());

        let runner = ShellRunner::default();
        let started = Instant::now();
        let result = runner.execute(&command, Duration::from_secs(1)).await;

        assert_eq!(
            result.outcome,
            ExecutionOutcome::TimedOut { after: Duration::from_secs(1) }
        );
        assert!(started.elapsed() < Duration::from_secs(3));

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(live_processes("sleep 41.393").is_empty());
        assert!(!marker.exists());
    }

    #[tokio::test]
    async fn test_timeout_kills_pipeline() {
        let runner = ShellRunner::default();
        let result = runner.execute("sleep 43.217 | cat", Duration::from_secs(1)).await;

        assert!(matches!(result.outcome, ExecutionOutcome::TimedOut { .. }));

        tokio::time::sleep(Duration::from_millis(300)).await;
        let survivors = live_processes("sleep 43.217");
        assert!(survivors.is_empty(), "processes left running: {:?}", survivors);
    }
}
