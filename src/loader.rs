// ABOUTME: Storage seam for template content
// ABOUTME: Defines the read-only load-by-path trait and the filesystem implementation

use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::error::{Result, TemplateError};

/// Read-only "load text by path" capability, the resolver's only external
/// collaborator.
///
/// Every path, at every import depth, is interpreted against one fixed root;
/// implementations must resolve paths deterministically and never relative to
/// the file that referenced them.
pub trait ContentSource {
    fn load(&self, path: &str) -> Result<String>;
}

/// Filesystem-backed source rooted at a fixed working directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for FsSource {
    /// Root at the process working directory.
    fn default() -> Self {
        Self::new(".")
    }
}

impl ContentSource for FsSource {
    fn load(&self, path: &str) -> Result<String> {
        let full_path = self.root.join(path);
        debug!(path, full_path = %full_path.display(), "loading template");

        fs::read_to_string(&full_path).map_err(|source| TemplateError::TemplateNotFound {
            path: path.to_string(),
            source,
        })
    }
}
