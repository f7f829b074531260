// src/exec/runner.rs

//! External tool process runner.

use std::io;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Split};
use tokio::process::Command;
use tracing::{debug, error, info};

use crate::errors::{Result, WebOptimizerError};
use crate::exec::ToolInvocation;

/// Outcome of a single finished tool process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub exit_code: i32,
    /// Stdout and stderr lines, interleaved in arrival order.
    pub output: String,
    pub duration: Duration,
}

impl ProcessResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run `invocation` to completion and require exit code 0.
///
/// Output is logged at debug on success and at error on failure. A non-zero
/// exit fails with [`WebOptimizerError::ToolInvocation`] carrying the code.
pub async fn run_tool(invocation: &ToolInvocation) -> Result<ProcessResult> {
    let result = execute(invocation).await?;
    let tool = invocation.program();

    if !result.success() {
        error!(tool, exit_code = result.exit_code, "{}", result.output);
        return Err(WebOptimizerError::ToolInvocation {
            tool: tool.to_string(),
            exit_code: Some(result.exit_code),
            source: None,
        });
    }

    info!(
        tool,
        duration_ms = result.duration.as_millis() as u64,
        "{tool} completed in {}ms",
        result.duration.as_millis()
    );
    debug!(tool, "-- {tool} output --");
    debug!(tool, "{}", result.output.trim());
    debug!(tool, "-- end {tool} output --");

    Ok(result)
}

/// Spawn the tool, drain its merged output and wait for it to exit.
///
/// Any exit code is returned as-is. Failing to start, failing to wait, and
/// termination without an exit code (e.g. by a signal) are reported as
/// [`WebOptimizerError::ToolInvocation`] with the underlying I/O error.
pub async fn execute(invocation: &ToolInvocation) -> Result<ProcessResult> {
    let tool = invocation.program();
    debug!(tool, "Running {tool} with arguments:");
    for arg in invocation.args() {
        debug!(tool, "\t{arg}");
    }

    let started = Instant::now();

    let mut child = Command::new(tool)
        .args(invocation.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| launch_error(tool, e))?;

    // Both pipes are drained to EOF before waiting, so a chatty child can
    // never block on a full pipe buffer.
    let output = drain_merged(
        child.stdout.take().map(|s| BufReader::new(s).split(b'\n')),
        child.stderr.take().map(|s| BufReader::new(s).split(b'\n')),
    )
    .await
    .map_err(|e| launch_error(tool, e))?;

    let status = child.wait().await.map_err(|e| launch_error(tool, e))?;
    let duration = started.elapsed();

    match status.code() {
        Some(exit_code) => Ok(ProcessResult {
            exit_code,
            output,
            duration,
        }),
        None => Err(launch_error(
            tool,
            io::Error::new(
                io::ErrorKind::Interrupted,
                format!("{tool} was terminated before completion ({status})"),
            ),
        )),
    }
}

fn launch_error(tool: &str, source: io::Error) -> WebOptimizerError {
    WebOptimizerError::ToolInvocation {
        tool: tool.to_string(),
        exit_code: None,
        source: Some(source),
    }
}

async fn drain_merged<A, B>(mut stdout: Option<Split<A>>, mut stderr: Option<Split<B>>) -> io::Result<String>
where
    A: AsyncBufRead + Unpin,
    B: AsyncBufRead + Unpin,
{
    let mut combined = String::new();

    loop {
        tokio::select! {
            segment = next_segment(&mut stdout), if stdout.is_some() => match segment? {
                Some(line) => push_line(&mut combined, &line),
                None => stdout = None,
            },
            segment = next_segment(&mut stderr), if stderr.is_some() => match segment? {
                Some(line) => push_line(&mut combined, &line),
                None => stderr = None,
            },
            else => break,
        }
    }

    Ok(combined)
}

async fn next_segment<R: AsyncBufRead + Unpin>(
    lines: &mut Option<Split<R>>,
) -> io::Result<Option<Vec<u8>>> {
    match lines {
        Some(lines) => lines.next_segment().await,
        None => Ok(None),
    }
}

fn push_line(combined: &mut String, line: &[u8]) {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    combined.push_str(&String::from_utf8_lossy(line));
    combined.push('\n');
}
