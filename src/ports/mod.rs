mod artifact_store;
mod summarizer;

pub use artifact_store::ArtifactStore;
pub use summarizer::{Summarizer, SummaryRequest};
