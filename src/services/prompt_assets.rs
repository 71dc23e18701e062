use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::domain::prompt::{BATCH_TEMPLATE_NAME, MASTER_TEMPLATE_NAME, PromptTemplates};

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// Prompt templates compiled into the binary.
pub fn embedded_prompt_templates() -> Result<PromptTemplates, AppError> {
    Ok(PromptTemplates {
        batch: prompt_template_content(BATCH_TEMPLATE_NAME)?,
        master: prompt_template_content(MASTER_TEMPLATE_NAME)?,
    })
}

fn prompt_template_content(name: &str) -> Result<String, AppError> {
    let file = PROMPTS_DIR
        .get_file(name)
        .ok_or_else(|| AppError::Internal(format!("Missing prompt template {}", name)))?;
    file.contents_utf8()
        .map(|content| content.to_string())
        .ok_or_else(|| AppError::Internal(format!("Prompt template {} is not UTF-8", name)))
}
