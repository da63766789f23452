// Web layer: askama templates, htmx fragments, chat sessions

pub mod handlers;
pub mod markdown;
pub mod sessions;

use askama::Template;
use axum::response::Html;

/// Render a template, falling back to an inline error message
pub fn render<T: Template>(template: &T) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template error: {}", e);
        format!("Template error: {}", e)
    }))
}
