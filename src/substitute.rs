// ABOUTME: Variable substitution over import-expanded template content
// ABOUTME: Replaces {{name}} markers with bound values, strict or pass-through

use std::collections::HashMap;
use tracing::debug;

use crate::error::{Result, TemplateError};
use crate::marker;

/// Replace every remaining marker in `content` with its bound value.
///
/// Lookup is exact: payloads are not trimmed, so `{{ name }}` and `{{name}}`
/// are different variables. By this stage imports are gone; any marker found
/// here is treated as a variable marker regardless of payload. Scanning
/// resumes after each spliced value, so a value containing `{{...}}`-shaped
/// text is inserted literally and never re-expanded.
///
/// In strict mode (the default) an unbound marker aborts with
/// `MissingVariable`. With `skip_undefined` the marker is left verbatim
/// instead, for callers that substitute in several passes. Bindings that no
/// marker references are never an error.
pub(crate) fn substitute(
    content: String,
    bindings: &HashMap<String, String>,
    skip_undefined: bool,
) -> Result<String> {
    let mut content = content;
    let mut cursor = 0;
    let mut replaced = 0usize;

    while let Some(found) = marker::next_marker(&content, cursor) {
        let (start, end) = (found.start, found.end);
        let name = found.payload.to_string();
        let indent = marker::leading_indent(&content, start).to_string();

        let Some(value) = bindings.get(&name) else {
            if skip_undefined {
                cursor = end;
                continue;
            }
            return Err(TemplateError::MissingVariable(name));
        };

        let spliced = marker::apply_indent(value, &indent);
        content.replace_range(start..end, &spliced);
        cursor = start + spliced.len();
        replaced += 1;
    }

    debug!(replaced, "variable substitution complete");
    Ok(content)
}
