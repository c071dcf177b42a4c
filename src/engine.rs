// ABOUTME: Template engine tying loading, import expansion, and substitution together
// ABOUTME: Provides the configured resolve entry points over a content source

use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

use crate::error::Result;
use crate::expand::{self, ExpandState};
use crate::loader::{ContentSource, FsSource};
use crate::substitute;

/// Generous ceiling on simultaneously open imports. Real template trees are a
/// handful of levels deep; anything approaching this is a cycle the chain
/// check could not recognize.
pub const DEFAULT_MAX_IMPORT_DEPTH: usize = 1000;

/// The template resolver.
///
/// Holds only immutable configuration, so one engine can be shared freely and
/// called from multiple threads; all per-call state lives on the stack of a
/// single `resolve` invocation.
pub struct TemplateEngine<S: ContentSource = FsSource> {
    source: S,
    max_depth: usize,
    skip_undefined: bool,
    cache_reads: bool,
}

impl TemplateEngine<FsSource> {
    /// Engine over the filesystem, rooted at the process working directory.
    pub fn new() -> Self {
        Self::with_source(FsSource::default())
    }

    /// Engine over the filesystem, rooted at a fixed directory. Every import
    /// path, at every nesting depth, resolves against this root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::with_source(FsSource::new(root))
    }
}

impl Default for TemplateEngine<FsSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ContentSource> TemplateEngine<S> {
    /// Engine over a custom content source.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            max_depth: DEFAULT_MAX_IMPORT_DEPTH,
            skip_undefined: false,
            cache_reads: false,
        }
    }

    /// Cap on simultaneously open imports, counting the root template.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    /// Leave unbound variable markers verbatim instead of failing, for
    /// callers that substitute in several passes.
    pub fn with_skip_undefined(mut self, skip: bool) -> Self {
        self.skip_undefined = skip;
        self
    }

    /// Memoize storage reads within one resolution. Changes I/O volume only;
    /// the resolved output is identical.
    pub fn with_read_cache(mut self, cache: bool) -> Self {
        self.cache_reads = cache;
        self
    }

    /// Resolve the template at `path`: load it, inline every import
    /// recursively, then substitute the bindings. Returns the final string or
    /// the first error; there is no partial output.
    pub fn resolve(&self, path: &str, bindings: &HashMap<String, String>) -> Result<String> {
        debug!(path, "resolving template");

        let mut state = ExpandState::new(self.max_depth, self.cache_reads);
        let expanded = expand::expand_template(&self.source, path, &mut state)?;
        substitute::substitute(expanded, bindings, self.skip_undefined)
    }

    /// Resolve an already-loaded template string. Imports inside it are
    /// loaded from the engine's source and tracked exactly as in `resolve`.
    pub fn resolve_str(&self, content: &str, bindings: &HashMap<String, String>) -> Result<String> {
        let mut state = ExpandState::new(self.max_depth, self.cache_reads);
        let expanded = expand::expand_content(&self.source, content.to_string(), &mut state)?;
        substitute::substitute(expanded, bindings, self.skip_undefined)
    }
}

/// Resolve `path` with a default engine: filesystem source rooted at the
/// process working directory, strict substitution.
pub fn resolve(path: &str, bindings: &HashMap<String, String>) -> Result<String> {
    TemplateEngine::new().resolve(path, bindings)
}
