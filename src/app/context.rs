use crate::domain::PromptBuilder;
use crate::ports::{ArtifactStore, Summarizer};

/// Application context holding dependencies for a summarization run.
pub struct AppContext<S: Summarizer, A: ArtifactStore> {
    summarizer: S,
    artifacts: A,
    prompts: PromptBuilder,
}

impl<S: Summarizer, A: ArtifactStore> AppContext<S, A> {
    /// Create a new application context.
    pub fn new(summarizer: S, artifacts: A, prompts: PromptBuilder) -> Self {
        Self { summarizer, artifacts, prompts }
    }

    /// Get a reference to the summarizer.
    pub fn summarizer(&self) -> &S {
        &self.summarizer
    }

    /// Get a reference to the artifact store.
    pub fn artifacts(&self) -> &A {
        &self.artifacts
    }

    /// Get a reference to the prompt builder.
    pub fn prompts(&self) -> &PromptBuilder {
        &self.prompts
    }
}
