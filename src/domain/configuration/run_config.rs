//! Run configuration domain models.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration for a summarization run, optionally loaded from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Summarizer selection and model parameters.
    #[serde(default)]
    pub summarizer: SummarizerConfig,
    /// Batching parameters.
    #[serde(default)]
    pub batch: BatchConfig,
    /// Artifact locations.
    #[serde(default)]
    pub output: OutputConfig,
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.summarizer.validate()?;
        self.batch.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

/// Transport used to reach the language model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerBackend {
    /// Spawn a local program and feed the prompt on stdin.
    #[default]
    Command,
    /// POST to an Ollama-compatible `/api/generate` endpoint.
    Http,
}

impl SummarizerBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummarizerBackend::Command => "command",
            SummarizerBackend::Http => "http",
        }
    }
}

impl fmt::Display for SummarizerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummarizerBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "command" => Ok(SummarizerBackend::Command),
            "http" => Ok(SummarizerBackend::Http),
            other => Err(format!("unknown backend '{}': expected 'command' or 'http'", other)),
        }
    }
}

/// Summarizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummarizerConfig {
    #[serde(default)]
    pub backend: SummarizerBackend,
    /// Model name passed to the backend.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default)]
    pub command: CommandBackendConfig,
    #[serde(default)]
    pub http: HttpBackendConfig,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            backend: SummarizerBackend::default(),
            model: default_model(),
            temperature: default_temperature(),
            command: CommandBackendConfig::default(),
            http: HttpBackendConfig::default(),
        }
    }
}

impl SummarizerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("model must not be empty"));
        }
        if !self.temperature.is_finite() || !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::config_error(format!(
                "temperature must be between 0 and 2, got {}",
                self.temperature
            )));
        }
        self.command.validate()?;
        self.http.validate()?;
        Ok(())
    }
}

fn default_model() -> String {
    "llama3".to_string()
}

fn default_temperature() -> f64 {
    0.5
}

/// Placeholder replaced with the model name in command arguments.
pub const MODEL_PLACEHOLDER: &str = "{model}";
/// Placeholder replaced with the temperature in command arguments.
pub const TEMPERATURE_PLACEHOLDER: &str = "{temperature}";

/// Local program invocation. Arguments are passed as argv, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandBackendConfig {
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments; `{model}` and `{temperature}` are substituted per element.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for CommandBackendConfig {
    fn default() -> Self {
        Self { program: default_program(), args: default_args() }
    }
}

impl CommandBackendConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.program.trim().is_empty() {
            return Err(AppError::config_error("command program must not be empty"));
        }
        Ok(())
    }

    /// Whether some argument carries the sampling temperature.
    pub fn passes_temperature(&self) -> bool {
        self.args.iter().any(|arg| arg.contains(TEMPERATURE_PLACEHOLDER))
    }
}

fn default_program() -> String {
    "ollama".to_string()
}

fn default_args() -> Vec<String> {
    vec![
        "run".to_string(),
        MODEL_PLACEHOLDER.to_string(),
        "--temperature".to_string(),
        TEMPERATURE_PLACEHOLDER.to_string(),
    ]
}

/// Ollama HTTP API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpBackendConfig {
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds; unset waits indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: None }
    }
}

impl HttpBackendConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == Some(0) {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("http://localhost:11434/api/generate").expect("Default API URL must be valid")
}

/// Batching configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// Records per batch.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Reject prompts longer than this many characters.
    #[serde(default)]
    pub max_prompt_chars: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { chunk_size: default_chunk_size(), max_prompt_chars: None }
    }
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.chunk_size == 0 {
            return Err(AppError::config_error("chunk_size must be greater than 0"));
        }
        if self.max_prompt_chars == Some(0) {
            return Err(AppError::config_error("max_prompt_chars must be greater than 0"));
        }
        Ok(())
    }

    /// Fail when `prompt` exceeds `max_prompt_chars`.
    pub fn check_prompt(&self, scope: &str, prompt: &str) -> Result<(), AppError> {
        let Some(limit) = self.max_prompt_chars else {
            return Ok(());
        };
        let chars = prompt.chars().count();
        if chars > limit {
            return Err(AppError::PromptTooLarge { scope: scope.to_string(), chars, limit });
        }
        Ok(())
    }
}

fn default_chunk_size() -> usize {
    10
}

/// Artifact locations, relative to `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_batch_dir")]
    pub batch_dir: PathBuf,
    #[serde(default = "default_batch_file_prefix")]
    pub batch_file_prefix: String,
    #[serde(default = "default_combined_file")]
    pub combined_file: PathBuf,
    #[serde(default = "default_master_file")]
    pub master_file: PathBuf,
    #[serde(default = "default_asset_stats_file")]
    pub asset_stats_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            batch_dir: default_batch_dir(),
            batch_file_prefix: default_batch_file_prefix(),
            combined_file: default_combined_file(),
            master_file: default_master_file(),
            asset_stats_file: default_asset_stats_file(),
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let files = [
            ("combined_file", &self.combined_file),
            ("master_file", &self.master_file),
            ("asset_stats_file", &self.asset_stats_file),
        ];
        for (name, path) in files {
            if path.as_os_str().is_empty() {
                return Err(AppError::config_error(format!("{} must not be empty", name)));
            }
        }
        if self.batch_file_prefix.contains(['/', '\\']) {
            return Err(AppError::config_error(
                "batch_file_prefix must not contain path separators",
            ));
        }
        Ok(())
    }

    /// Relative path of the artifact for batch `number`.
    pub fn batch_file(&self, number: usize) -> PathBuf {
        self.batch_dir.join(format!("{}{}.json", self.batch_file_prefix, number))
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_batch_dir() -> PathBuf {
    PathBuf::from("batch_summaries")
}

fn default_batch_file_prefix() -> String {
    "batch_summary_".to_string()
}

fn default_combined_file() -> PathBuf {
    PathBuf::from("all_batch_summaries.json")
}

fn default_master_file() -> PathBuf {
    PathBuf::from("master_summary.json")
}

fn default_asset_stats_file() -> PathBuf {
    PathBuf::from("asset_failure_summary.json")
}
