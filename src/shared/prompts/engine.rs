//! Template engine for prompt management using Jinja2 syntax.
//!
//! Built-in prompts are compiled into the binary. Any `.jinja` file found in
//! the configured template directory replaces the built-in template with the
//! same relative name, so prompts can be tuned without a rebuild.

use minijinja::{Environment, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Override directory, set once during app initialization
static TEMPLATE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Templates shipped with the binary, keyed by their path under `templates/prompts/`
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "chat/system.jinja",
        include_str!("../../../templates/prompts/chat/system.jinja"),
    ),
    (
        "suggest/user.jinja",
        include_str!("../../../templates/prompts/suggest/user.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

/// Set the directory scanned for template overrides.
///
/// Must run before the first render; later calls are ignored.
pub fn init_template_dir(dir: PathBuf) {
    if TEMPLATE_DIR.set(dir).is_err() {
        tracing::warn!("Prompt template directory already initialized");
    }
}

/// Build an environment from the built-ins plus overrides found in `override_dir`
fn build_environment(override_dir: Option<&Path>) -> Environment<'static> {
    let mut env = Environment::new();

    for &(name, source) in BUILTIN_TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::error!("Built-in template {} is invalid: {}", name, e);
        }
    }

    if let Some(dir) = override_dir.filter(|dir| dir.exists()) {
        load_templates_recursive(&mut env, dir, dir);
    }

    env
}

/// Recursively load all .jinja templates from a directory
fn load_templates_recursive(env: &mut Environment<'static>, base_path: &Path, current_path: &Path) {
    if let Ok(entries) = std::fs::read_dir(current_path) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                load_templates_recursive(env, base_path, &path);
            } else if path.extension().is_some_and(|ext| ext == "jinja") {
                // Create template name from relative path
                if let Ok(relative) = path.strip_prefix(base_path) {
                    let template_name = relative.to_string_lossy().replace('\\', "/");
                    if let Ok(content) = std::fs::read_to_string(&path) {
                        // Leaked once per file at startup; templates live for the whole process
                        let static_name: &'static str =
                            Box::leak(template_name.clone().into_boxed_str());
                        let static_content: &'static str = Box::leak(content.into_boxed_str());
                        if let Err(e) = env.add_template(static_name, static_content) {
                            tracing::warn!("Failed to load template {}: {}", template_name, e);
                        } else {
                            tracing::debug!("Loaded template override: {}", template_name);
                        }
                    }
                }
            }
        }
    }
}

/// Get the global template environment
fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(|| build_environment(TEMPLATE_DIR.get().map(PathBuf::as_path)))
}

fn render_in(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &HashMap<&str, Value>,
) -> Result<String, TemplateError> {
    let template = env
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    let render_ctx = Value::from_iter(ctx.iter().map(|(k, v)| (*k, v.clone())));

    template
        .render(render_ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

/// Render a template with the given context.
///
/// # Arguments
/// * `template_name` - The template path relative to `templates/prompts/` (e.g., "chat/system.jinja")
/// * `context` - A HashMap of variable names to values
pub fn render_template(
    template_name: &str,
    ctx: &HashMap<&str, Value>,
) -> Result<String, TemplateError> {
    render_in(get_environment(), template_name, ctx)
}

/// List all available templates
pub fn list_templates() -> Vec<String> {
    get_environment()
        .templates()
        .map(|(name, _)| name.to_string())
        .collect()
}
