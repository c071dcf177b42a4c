// ABOUTME: Marker scanning primitives shared by import expansion and variable substitution
// ABOUTME: Finds {{...}} spans and handles indentation of spliced content

/// Opening delimiter of a marker.
pub(crate) const OPEN: &str = "{{";
/// Closing delimiter of a marker.
pub(crate) const CLOSE: &str = "}}";
/// Payloads starting with this character name a file to import.
pub(crate) const IMPORT_SENTINEL: char = '$';

/// A single `{{...}}` span found in template text.
///
/// The payload is the verbatim text between the first opening delimiter and
/// the first closing delimiter after it. Markers do not nest and there is no
/// escape syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Marker<'a> {
    /// Byte offset of the opening delimiter.
    pub start: usize,
    /// Byte offset just past the closing delimiter.
    pub end: usize,
    /// Text between the delimiters, untrimmed.
    pub payload: &'a str,
}

impl<'a> Marker<'a> {
    /// The import path with the sentinel stripped, or `None` for a variable
    /// marker.
    pub fn import_path(&self) -> Option<&'a str> {
        self.payload.strip_prefix(IMPORT_SENTINEL)
    }
}

/// Find the next marker at or after byte offset `from`.
///
/// Returns `None` when no complete marker remains; an unterminated `{{` is
/// plain text, not an error.
pub(crate) fn next_marker(text: &str, from: usize) -> Option<Marker<'_>> {
    let start = from + text[from..].find(OPEN)?;
    let payload_start = start + OPEN.len();
    let close = payload_start + text[payload_start..].find(CLOSE)?;

    Some(Marker {
        start,
        end: close + CLOSE.len(),
        payload: &text[payload_start..close],
    })
}

/// The run of blanks (spaces and tabs) immediately preceding `start`.
///
/// The run stops at a newline or any other non-blank character, so a marker
/// alone on an indented line yields that line's indentation.
pub(crate) fn leading_indent(text: &str, start: usize) -> &str {
    let head = &text[..start];
    let trimmed = head.trim_end_matches([' ', '\t']);
    &head[trimmed.len()..]
}

/// Prefix every line but the first with `indent`, then drop trailing blank
/// space so spliced content joins seamlessly with the text after the marker.
pub(crate) fn apply_indent(text: &str, indent: &str) -> String {
    let mut out = String::with_capacity(text.len() + indent.len() * 4);
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            out.push('\n');
            out.push_str(indent);
        }
        out.push_str(line);
    }

    out.truncate(out.trim_end_matches(['\t', ' ', '\r', '\n']).len());
    out
}
