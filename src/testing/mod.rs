mod fake_summarizer;
mod memory_artifact_store;
mod work_orders;

pub use fake_summarizer::FakeSummarizer;
pub use memory_artifact_store::MemoryArtifactStore;
pub use work_orders::work_order_table;
