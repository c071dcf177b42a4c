// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides a temp-dir template tree and configured engines for the test suite

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use inlay::TemplateEngine;

/// Install a fmt subscriber once so RUST_LOG surfaces resolver tracing in
/// test output.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        init_tracing();
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a template file under the environment root, creating parent
    /// directories for nested names like `views/header.tmpl`.
    pub fn write_template(&self, name: &str, content: &str) -> PathBuf {
        let file_path = self.path().join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create template directory");
        }
        fs::write(&file_path, content).expect("Failed to write template file");
        file_path
    }

    /// An engine rooted at this environment's template tree.
    pub fn engine(&self) -> TemplateEngine {
        TemplateEngine::with_root(self.path())
    }
}

pub fn bindings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
