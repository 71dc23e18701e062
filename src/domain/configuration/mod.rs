pub mod loader;
pub mod run_config;

pub use loader::{load_config, parse_config_content};
pub use run_config::{
    BatchConfig, CommandBackendConfig, HttpBackendConfig, MODEL_PLACEHOLDER, OutputConfig,
    RunConfig, SummarizerBackend, SummarizerConfig, TEMPERATURE_PLACEHOLDER,
};
