//! Error handling for template rendering.

use thiserror::Error;

/// Result type for template operations.
pub type TmplResult<T> = Result<T, TmplError>;

/// Errors that can occur while loading or rendering templates.
#[derive(Error, Debug)]
pub enum TmplError {
    /// One or more placeholders had no value in the pass that was due to
    /// resolve them. Rendering fails closed; partial output is never
    /// returned as a success.
    #[error("Unresolved placeholders: {}", .names.join(", "))]
    UnresolvedPlaceholder { names: Vec<String> },

    /// Unbalanced braces or an unrecognized escaping pattern.
    #[error("Malformed template at line {line}, column {col}: {message}")]
    MalformedTemplate {
        line: usize,
        col: usize,
        message: String,
    },

    /// Requested template does not exist in the store.
    #[error("Template not found: {0}")]
    MissingTemplate(String),

    /// Parameter set could not be constructed from the given source.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parameter file error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parameter file error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
