//! External tool execution with a hard timeout

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::error::{TrackNameError, TrackNameResult};

/// Captured result of one tool invocation
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// Everything the tool printed, stdout first, trimmed
    pub fn diagnostic(&self) -> String {
        let parts: Vec<&str> = [self.stdout.trim(), self.stderr.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            match self.code {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            }
        } else {
            parts.join("\n")
        }
    }
}

/// Runs one external program, killing it if it outlives the timeout
#[derive(Debug, Clone)]
pub struct ToolRunner {
    program: PathBuf,
    timeout: Duration,
}

impl ToolRunner {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.display().to_string())
    }

    /// Run the program to completion and capture its output
    pub async fn run(&self, args: &[OsString]) -> TrackNameResult<ToolOutput> {
        tracing::debug!("Running {} {:?}", self.program.display(), args);

        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                TrackNameError::Io(std::io::Error::new(
                    e.kind(),
                    format!("failed to start {}: {}", self.program.display(), e),
                ))
            })?;

        // Dropping the child on timeout kills it.
        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| TrackNameError::Timeout {
                tool: self.tool_name(),
                after: self.timeout,
            })??;

        Ok(ToolOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
