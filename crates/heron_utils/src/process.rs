use anyhow::{anyhow, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub fn command(program: &Path, args: &[String]) -> Command {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    command
}

/// Spawns the program and waits for it, capturing both output streams.
pub async fn run(program: &Path, args: &[String]) -> Result<ProcessOutput> {
    debug!("spawning {} {}", program.display(), args.join(" "));

    let output = command(program, args)
        .output()
        .await
        .map_err(|e| anyhow!("could not spawn {}: {e}", program.display()))?;

    let result = ProcessOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    };
    debug!("{} exited with code {:?}", program.display(), result.code);

    Ok(result)
}
