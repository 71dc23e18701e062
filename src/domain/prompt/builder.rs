use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, BatchSummary, RowSlice};

/// Shortest failure prediction window the model may give, in days.
pub const PREDICTION_MIN_DAYS: u32 = 30;
/// Longest failure prediction window the model may give, in days.
pub const PREDICTION_MAX_DAYS: u32 = 60;

pub const BATCH_TEMPLATE_NAME: &str = "batch.j2";
pub const MASTER_TEMPLATE_NAME: &str = "master.j2";

/// Template sources for the two prompt levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplates {
    pub batch: String,
    pub master: String,
}

/// Renders batch and master prompts. Embedded record text is not escaped.
pub struct PromptBuilder {
    env: Environment<'static>,
    templates: PromptTemplates,
}

impl PromptBuilder {
    pub fn new(templates: PromptTemplates) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env, templates }
    }

    /// Prompt asking for per-asset failure patterns of one batch.
    pub fn batch_prompt(&self, rows: RowSlice<'_>) -> Result<String, AppError> {
        self.render(
            BATCH_TEMPLATE_NAME,
            &self.templates.batch,
            context! {
                table => rows.render_text(),
                min_days => PREDICTION_MIN_DAYS,
                max_days => PREDICTION_MAX_DAYS,
            },
        )
    }

    /// Prompt asking for a cross-batch summary.
    pub fn master_prompt(&self, batches: &[BatchSummary]) -> Result<String, AppError> {
        self.render(
            MASTER_TEMPLATE_NAME,
            &self.templates.master,
            context! { summaries => join_batch_summaries(batches) },
        )
    }

    fn render(
        &self,
        name: &str,
        source: &str,
        ctx: minijinja::Value,
    ) -> Result<String, AppError> {
        self.env.render_str(source, ctx).map_err(|err| AppError::PromptRender {
            template: name.to_string(),
            reason: err.to_string(),
        })
    }
}

/// `Batch N Summary: <text>` blocks separated by blank lines.
pub fn join_batch_summaries(batches: &[BatchSummary]) -> String {
    batches
        .iter()
        .map(|batch| format!("Batch {} Summary: {}", batch.batch_number, batch.summary))
        .collect::<Vec<_>>()
        .join("\n\n")
}
