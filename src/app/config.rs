//! Layering of config file values and command-line overrides.

use std::path::{Path, PathBuf};

use crate::domain::configuration::load_config;
use crate::domain::{AppError, RunConfig, SummarizerBackend};

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub chunk_size: Option<usize>,
    pub temperature: Option<f64>,
    pub model: Option<String>,
    pub backend: Option<SummarizerBackend>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut RunConfig) {
        if let Some(chunk_size) = self.chunk_size {
            config.batch.chunk_size = chunk_size;
        }
        if let Some(temperature) = self.temperature {
            config.summarizer.temperature = temperature;
        }
        if let Some(model) = self.model {
            config.summarizer.model = model;
        }
        if let Some(backend) = self.backend {
            config.summarizer.backend = backend;
        }
        if let Some(output_dir) = self.output_dir {
            config.output.root = output_dir;
        }
    }
}

/// Load the optional config file, apply overrides, then validate the result.
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<RunConfig, AppError> {
    let mut config = load_config(config_path)?;
    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}
