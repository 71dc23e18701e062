//! Run configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, RunConfig};

/// Load the run configuration from `path`, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<RunConfig, AppError> {
    let Some(path) = path else {
        return Ok(RunConfig::default());
    };

    if !path.is_file() {
        return Err(AppError::ConfigNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<RunConfig, AppError> {
    let config: RunConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
