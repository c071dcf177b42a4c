// ABOUTME: Main library module for the inlay template resolver
// ABOUTME: Exports the engine, loader seam, and error types of the public API

pub mod engine;
pub mod error;
pub mod loader;

mod expand;
mod marker;
mod substitute;

// Re-export commonly used types
pub use engine::{resolve, TemplateEngine, DEFAULT_MAX_IMPORT_DEPTH};
pub use error::{Result, TemplateError};
pub use loader::{ContentSource, FsSource};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
