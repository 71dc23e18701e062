pub mod preview;
pub mod stats;
pub mod summarize;
