// ABOUTME: Error types for template resolution operations
// ABOUTME: Defines specific error types for loading, import expansion, and substitution

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {path} ({source})")]
    TemplateNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Import cycle detected: '{path}' is already being expanded (chain: {chain:?})")]
    ImportCycle { path: String, chain: Vec<String> },

    #[error("Import depth limit of {limit} exceeded while expanding '{path}'")]
    MaxImportDepthExceeded { path: String, limit: usize },

    #[error("Missing template variable: {0}")]
    MissingVariable(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
