// ABOUTME: Recursive import expansion for template content
// ABOUTME: Eliminates {{$path}} markers depth-first with cycle and depth protection

use std::collections::HashMap;
use tracing::debug;

use crate::error::{Result, TemplateError};
use crate::loader::ContentSource;
use crate::marker;

/// Per-invocation expansion state: the chain of in-flight import paths and the
/// optional read cache. Lives for one top-level resolution only.
pub(crate) struct ExpandState {
    chain: Vec<String>,
    cache: Option<HashMap<String, String>>,
    max_depth: usize,
}

impl ExpandState {
    pub fn new(max_depth: usize, cache_reads: bool) -> Self {
        Self {
            chain: Vec::new(),
            cache: cache_reads.then(HashMap::new),
            max_depth,
        }
    }

    fn load<S: ContentSource>(&mut self, source: &S, path: &str) -> Result<String> {
        if let Some(cache) = &mut self.cache {
            if let Some(content) = cache.get(path) {
                return Ok(content.clone());
            }
            let content = source.load(path)?;
            cache.insert(path.to_string(), content.clone());
            return Ok(content);
        }

        source.load(path)
    }
}

/// Load the template at `path` and expand every import marker in it.
///
/// The path joins the in-flight chain for the duration of the call, so a
/// template that imports itself (directly or through a chain) fails with
/// `ImportCycle` instead of recursing forever. The chain length is also capped
/// by the configured depth limit, which backstops cycles spelled through
/// aliased paths the chain cannot recognize.
pub(crate) fn expand_template<S: ContentSource>(
    source: &S,
    path: &str,
    state: &mut ExpandState,
) -> Result<String> {
    if state.chain.iter().any(|in_flight| in_flight == path) {
        return Err(TemplateError::ImportCycle {
            path: path.to_string(),
            chain: state.chain.clone(),
        });
    }

    if state.chain.len() >= state.max_depth {
        return Err(TemplateError::MaxImportDepthExceeded {
            path: path.to_string(),
            limit: state.max_depth,
        });
    }

    debug!(path, depth = state.chain.len(), "expanding template");

    let content = state.load(source, path)?;
    state.chain.push(path.to_string());
    let expanded = expand_content(source, content, state);
    state.chain.pop();

    expanded
}

/// Expand every import marker in `content`, left to right.
///
/// Each import is fully expanded before it is spliced in, and scanning resumes
/// after the spliced text, so the result is equivalent to pure
/// recursive-descent expansion. All paths resolve against the source's fixed
/// root regardless of nesting depth. Variable markers are left for the
/// substitution pass.
pub(crate) fn expand_content<S: ContentSource>(
    source: &S,
    content: String,
    state: &mut ExpandState,
) -> Result<String> {
    let mut content = content;
    let mut cursor = 0;

    while let Some(found) = marker::next_marker(&content, cursor) {
        let (start, end) = (found.start, found.end);
        let Some(path) = found.import_path().map(str::to_string) else {
            cursor = end;
            continue;
        };
        let indent = marker::leading_indent(&content, start).to_string();

        let expanded = expand_template(source, &path, state)?;
        let spliced = marker::apply_indent(&expanded, &indent);

        content.replace_range(start..end, &spliced);
        cursor = start + spliced.len();
    }

    Ok(content)
}
