//! Synthesizes the text edit that inserts the missing super call.

use crate::analysis::{MemberBody, MemberKind};
use crate::rule::TextEdit;

/// Render the super call itself. Methods produce a call expression with the
/// rendered argument text; getters and setters use the property form, which
/// is the only syntactically meaningful super reference for accessors.
pub fn render_call(kind: MemberKind, name: &str, parameters: &str) -> String {
    if kind.is_accessor() {
        format!("super.{}", name)
    } else {
        format!("super.{}({})", name, parameters)
    }
}

/// Compute the single edit that places `call` as the first statement of the
/// body.
///
/// With at least one token in the body, the call is inserted immediately
/// before that token. With no tokens, the whole body range is replaced by a
/// body opening with the call, keeping any comment-only content that lived
/// inside the braces.
pub fn synthesize_fix(body: &MemberBody, call: &str) -> TextEdit {
    match body.first_token_offset {
        Some(offset) => TextEdit {
            start_byte: offset,
            end_byte: offset,
            replacement: format!("{}\n", call),
        },
        None => {
            let inner = body.text.strip_prefix('{').unwrap_or(&body.text);
            TextEdit {
                start_byte: body.span.start_byte,
                end_byte: body.span.end_byte,
                replacement: format!("{{ {}\n{}", call, inner),
            }
        }
    }
}

/// Apply a set of edits to a source string.
///
/// Edits are applied in descending start order so earlier offsets stay
/// valid; the rule emits at most one edit per member and edits never
/// overlap.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> String {
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by(|a, b| b.start_byte.cmp(&a.start_byte));

    let mut output = source.to_string();
    for edit in ordered {
        output.replace_range(edit.start_byte..edit.end_byte, &edit.replacement);
    }
    output
}
