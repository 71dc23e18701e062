//! Summarizer port definition.

use crate::domain::AppError;

/// Request sent to the language model.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    /// Prompt text; the only carrier of instructions.
    pub prompt: String,
    /// Model name, e.g. `llama3`.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
}

impl SummaryRequest {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>, temperature: f64) -> Self {
        Self { prompt: prompt.into(), model: model.into(), temperature }
    }
}

/// Port for text generation.
///
/// Implementations return the model output with surrounding whitespace trimmed and
/// treat any transport failure as an error; callers never retry.
pub trait Summarizer {
    /// Human-readable backend name used in logs and errors.
    fn backend(&self) -> &'static str;

    /// Generate a summary for the request.
    fn summarize(&self, request: &SummaryRequest) -> Result<String, AppError>;
}

impl<S: Summarizer + ?Sized> Summarizer for Box<S> {
    fn backend(&self) -> &'static str {
        (**self).backend()
    }

    fn summarize(&self, request: &SummaryRequest) -> Result<String, AppError> {
        (**self).summarize(request)
    }
}
