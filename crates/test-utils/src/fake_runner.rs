use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::debug;
use web_optimizer::errors::{Result, WebOptimizerError};
use web_optimizer::exec::{ProcessResult, ToolInvocation, ToolRunner};

/// A fake runner that:
/// - records every invocation it is asked to run, in order
/// - reports exit code 0 unless a different code was registered for the
///   invocation's call index or program, in which case it fails like the
///   real runner. A call-index code wins over a program code.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    invocations: Arc<Mutex<Vec<ToolInvocation>>>,
    exit_codes: HashMap<String, i32>,
    call_exit_codes: HashMap<usize, i32>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` exit with `code`.
    pub fn with_exit_code(mut self, program: &str, code: i32) -> Self {
        self.exit_codes.insert(program.to_string(), code);
        self
    }

    /// Make the `call`-th invocation (zero-based) exit with `code`,
    /// whatever its program.
    pub fn with_call_exit_code(mut self, call: usize, code: i32) -> Self {
        self.call_exit_codes.insert(call, code);
        self
    }

    /// Shared handle to the recorded invocations; stays valid after the
    /// runner has been moved into an orchestrator.
    pub fn invocations(&self) -> Arc<Mutex<Vec<ToolInvocation>>> {
        Arc::clone(&self.invocations)
    }
}

impl ToolRunner for RecordingRunner {
    fn run<'a>(
        &'a mut self,
        invocation: &'a ToolInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessResult>> + Send + 'a>> {
        let invocations = Arc::clone(&self.invocations);
        let call_exit_codes = self.call_exit_codes.clone();
        let program_exit_code = self.exit_codes.get(invocation.program()).copied();

        Box::pin(async move {
            let exit_code = {
                let mut recorded = invocations.lock().unwrap();
                let call = recorded.len();
                recorded.push(invocation.clone());
                call_exit_codes
                    .get(&call)
                    .copied()
                    .or(program_exit_code)
                    .unwrap_or(0)
            };
            debug!(%invocation, exit_code, "fake runner invoked");

            if exit_code != 0 {
                return Err(WebOptimizerError::ToolInvocation {
                    tool: invocation.program().to_string(),
                    exit_code: Some(exit_code),
                    source: None,
                });
            }

            Ok(ProcessResult {
                exit_code,
                output: String::new(),
                duration: Duration::ZERO,
            })
        })
    }
}
