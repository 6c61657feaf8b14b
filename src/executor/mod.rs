pub mod outcome;
pub mod process_tree;
pub mod runner;

pub use outcome::{ExecutionOutcome, ExecutionResult};
pub use runner::ShellRunner;

use async_trait::async_trait;
use std::time::Duration;

/// Runs a command string and reports what happened
///
/// Implementations never fail: every problem is folded into the returned
/// [`ExecutionResult`].
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, command: &str, timeout: Duration) -> ExecutionResult;
}
