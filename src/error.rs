use thiserror::Error;

use crate::validate::Violation;

pub type Result<T> = std::result::Result<T, GhstatsError>;

#[derive(Error, Debug)]
pub enum GhstatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Snapshot is empty")]
    EmptySnapshot,
    #[error("Snapshot failed validation: {}", summarize(.0))]
    Schema(Vec<Violation>),
    #[error("Template error: {0}")]
    Template(#[from] Box<handlebars::RenderError>),
    #[error("Template registration error: {0}")]
    TemplateRegistration(#[from] Box<handlebars::TemplateError>),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<handlebars::RenderError> for GhstatsError {
    fn from(err: handlebars::RenderError) -> Self {
        GhstatsError::Template(Box::new(err))
    }
}

impl From<handlebars::TemplateError> for GhstatsError {
    fn from(err: handlebars::TemplateError) -> Self {
        GhstatsError::TemplateRegistration(Box::new(err))
    }
}

fn summarize(violations: &[Violation]) -> String {
    let mut parts: Vec<String> = violations.iter().take(3).map(|v| v.to_string()).collect();
    if violations.len() > 3 {
        parts.push(format!("and {} more", violations.len() - 3));
    }
    parts.join("; ")
}
