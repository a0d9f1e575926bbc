//! Prompt template management module.
//!
//! Templates live in `templates/prompts/` and use Jinja2 syntax.

pub mod engine;

pub use engine::{init_template_dir, list_templates, render_template, TemplateError};

use chrono::{Local, NaiveDate};
use minijinja::Value;
use std::collections::HashMap;

/// Inputs of the suggest prompt
#[derive(Debug, Clone)]
pub struct SuggestPromptContext<'a> {
    pub activity: &'a str,
    /// One of the section names of the reply schema, or "other"
    pub activity_kind: &'a str,
    /// Empty when the user gave no budget
    pub budget: &'a str,
    pub location_clause: &'a str,
    pub has_location: bool,
    pub json_schema: &'a str,
}

/// Render the fixed persona used as system message for `/chat`
pub fn render_chat_system_prompt() -> Result<String, TemplateError> {
    render_template("chat/system.jinja", &HashMap::new())
}

/// Render the single user prompt sent for `/suggest`, dated today
pub fn render_suggest_prompt(ctx: &SuggestPromptContext<'_>) -> Result<String, TemplateError> {
    render_suggest_prompt_on(ctx, Local::now().date_naive())
}

fn render_suggest_prompt_on(
    ctx: &SuggestPromptContext<'_>,
    today: NaiveDate,
) -> Result<String, TemplateError> {
    let mut values: HashMap<&str, Value> = HashMap::new();
    values.insert("day_name", Value::from(today.format("%A").to_string()));
    values.insert("date", Value::from(today.format("%Y-%m-%d").to_string()));
    values.insert("activity", Value::from(ctx.activity));
    values.insert("activity_kind", Value::from(ctx.activity_kind));
    values.insert("budget", Value::from(ctx.budget));
    values.insert("has_budget", Value::from(!ctx.budget.is_empty()));
    values.insert("location_clause", Value::from(ctx.location_clause));
    values.insert("has_location", Value::from(ctx.has_location));
    values.insert("json_schema", Value::from(ctx.json_schema));

    render_template("suggest/user.jinja", &values)
}
