use crate::engine::action::ActionKind;
use crate::engine::resolver::ResolvedEdit;

/// Splice accepted edits into the original text.
///
/// Walks the edits in ascending span order, copying the original text
/// verbatim between touched spans, printing each payload in place of
/// (Replace) or just after (InsertAfter) its span. Every byte outside the
/// touched spans is preserved, and an empty edit list returns the input
/// unchanged, byte for byte. Inserted statements start on a fresh line and
/// reuse the indentation at the insertion point so nested anchors stay
/// valid Python.
pub fn render(source: &str, edits: &[ResolvedEdit]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0usize;

    for edit in edits {
        out.push_str(&source[cursor..edit.span.start]);
        match edit.kind {
            ActionKind::Replace => {
                out.push_str(&edit.payload.to_string());
            }
            ActionKind::InsertAfter => {
                out.push('\n');
                out.push_str(indentation_at(source, edit.span.start));
                out.push_str(&edit.payload.to_string());
            }
        }
        cursor = edit.span.end;
    }

    out.push_str(&source[cursor..]);
    out
}

/// Leading whitespace of the line containing `offset`.
fn indentation_at(source: &str, offset: usize) -> &str {
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let rest = &source[line_start..];
    let indent_len = rest.len() - rest.trim_start_matches([' ', '\t']).len();
    &rest[..indent_len]
}
