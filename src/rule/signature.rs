//! Renders the argument text for the synthesized super call.

use crate::analysis::MemberKind;

/// Placeholder argument for a setter declared without a parameter. The
/// synthesized call must stay a single-argument call even when no parameter
/// exists in source.
pub const SETTER_FALLBACK: &str = "value";

/// Render the parameter text placed inside the super call, as a pure
/// function of kind and declared parameter fragments.
///
/// Getters never take call arguments, so any (erroneous) declared
/// parameters are dropped. Setters contribute exactly their first
/// parameter's full declaration text. Methods contribute every parameter
/// verbatim, preserving defaults, rest parameters, and type annotations.
pub fn render_parameters(kind: MemberKind, parameters: &[String]) -> String {
    match kind {
        MemberKind::Getter => String::new(),
        MemberKind::Setter => match parameters.first() {
            Some(p) if !p.is_empty() => p.clone(),
            _ => SETTER_FALLBACK.to_string(),
        },
        _ => parameters.join(", "),
    }
}
