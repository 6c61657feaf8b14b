//! Child process tree termination
//!
//! A timed out shell may have forked pipeline stages or the left side of an
//! `&&` chain. The tree is snapshotted while the shell is still alive (parent
//! links are lost once it dies), then every member is SIGKILLed.

use sysinfo::{Pid, Signal, System};

/// `root` 아래의 모든 자손 프로세스 (root 제외)
pub fn descendants(root: u32) -> Vec<u32> {
    let mut system = System::new();
    system.refresh_processes();

    let root = Pid::from_u32(root);
    let mut found: Vec<Pid> = Vec::new();
    let mut frontier = vec![root];

    while let Some(parent) = frontier.pop() {
        for (pid, process) in system.processes() {
            if process.parent() == Some(parent) && *pid != root && !found.contains(pid) {
                found.push(*pid);
                frontier.push(*pid);
            }
        }
    }

    found.into_iter().map(|pid| pid.as_u32()).collect()
}

/// 목록의 프로세스를 모두 SIGKILL (이미 종료된 프로세스는 무시)
pub fn kill_all(pids: &[u32]) {
    if pids.is_empty() {
        return;
    }

    let mut system = System::new();
    system.refresh_processes();

    for pid in pids {
        if let Some(process) = system.process(Pid::from_u32(*pid)) {
            if process.kill_with(Signal::Kill) != Some(true) {
                tracing::warn!(pid, "failed to kill descendant process");
            }
        }
    }
}
