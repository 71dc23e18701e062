//! Summarizer backed by a local program such as `ollama run`.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

use crate::domain::configuration::{MODEL_PLACEHOLDER, TEMPERATURE_PLACEHOLDER};
use crate::domain::{AppError, CommandBackendConfig};
use crate::ports::{Summarizer, SummaryRequest};

const BACKEND: &str = "command";

/// Spawns the configured program directly (no shell) and writes the prompt to its stdin.
#[derive(Debug, Clone)]
pub struct CommandSummarizer {
    program: String,
    args: Vec<String>,
}

impl CommandSummarizer {
    pub fn new(config: &CommandBackendConfig) -> Self {
        if !config.passes_temperature() {
            tracing::warn!(
                program = %config.program,
                "command arguments have no {} placeholder; temperature is not sent to the model",
                TEMPERATURE_PLACEHOLDER
            );
        }
        Self { program: config.program.clone(), args: config.args.clone() }
    }

    fn render_args(&self, request: &SummaryRequest) -> Vec<String> {
        let temperature = request.temperature.to_string();
        self.args
            .iter()
            .map(|arg| {
                arg.replace(MODEL_PLACEHOLDER, &request.model)
                    .replace(TEMPERATURE_PLACEHOLDER, &temperature)
            })
            .collect()
    }

    fn describe(&self, args: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Summarizer for CommandSummarizer {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    fn summarize(&self, request: &SummaryRequest) -> Result<String, AppError> {
        let args = self.render_args(request);
        let command_line = self.describe(&args);
        tracing::debug!(
            command = %command_line,
            prompt_bytes = request.prompt.len(),
            "spawning summarizer"
        );

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                AppError::summarizer(BACKEND, format!("failed to start '{}': {}", command_line, e))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| AppError::summarizer(BACKEND, "child stdin was not captured"))?;

        // Stdin is fed from a second thread so a large prompt cannot block on a full stdout pipe.
        let (write_result, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(request.prompt.as_bytes()));
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        let output = output.map_err(|e| {
            AppError::summarizer(BACKEND, format!("failed to wait for '{}': {}", command_line, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::summarizer(
                BACKEND,
                format!(
                    "'{}' exited with {}: {}",
                    command_line,
                    output.status,
                    if stderr.is_empty() { "no error output" } else { &stderr }
                ),
            ));
        }

        match write_result {
            Ok(Ok(())) => {}
            // The program may answer without draining stdin.
            Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => {
                return Err(AppError::summarizer(BACKEND, format!("failed to send prompt: {}", e)));
            }
            Err(_) => return Err(AppError::summarizer(BACKEND, "prompt writer thread panicked")),
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
