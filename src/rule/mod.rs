//! The missing-super-call rule.
//!
//! Three stateless pieces, invoked once per member with no carried-over
//! state: the scanner decides whether a member warrants a report, the
//! signature builder renders the argument text for the synthesized super
//! call, and the fix synthesizer computes the single text edit that inserts
//! it. This module wires them together per file.

mod fix;
mod scanner;
mod signature;
mod types;

use std::fs;
use std::path::Path;

use crate::analysis::{FileMembers, MemberExtractor};
use crate::config::Config;

pub use fix::{apply_edits, render_call, synthesize_fix};
pub use scanner::should_report;
pub use signature::{render_parameters, SETTER_FALLBACK};
pub use types::{Diagnostic, LintResult, RuleId, Severity, Suggestion, TextEdit};

/// Message template, interpolating rendered name and parameter text.
fn message(name: &str, parameters: &str) -> String {
    format!(
        "Use super.{}({}) to avoid missing super class method implementations",
        name, parameters
    )
}

/// Run the rule over the extracted members of one file.
///
/// Members are visited in lexical order; each produces at most one
/// diagnostic, and the input facts are never mutated.
pub fn check_members(facts: &FileMembers, config: &Config) -> LintResult {
    let mut result = LintResult::new();
    result.scanned = 1;

    for member in &facts.members {
        if !should_report(member, config) {
            continue;
        }
        // should_report only passes members with a body.
        let Some(body) = &member.body else {
            continue;
        };

        let parameters = render_parameters(member.kind, &member.parameters);
        let call = render_call(member.kind, &member.name, &parameters);
        let edit = synthesize_fix(body, &call);

        result.diagnostics.push(Diagnostic {
            rule: RuleId::MissingSuperCall,
            severity: Severity::Warning,
            file: facts.path.clone(),
            line: member.span.start_line,
            message: message(&member.name, &parameters),
            suggestion: Suggestion { edit },
        });
    }

    result
}

/// Parse a source buffer and run the rule over it.
pub fn check_source(
    path: &Path,
    source: &[u8],
    config: &Config,
) -> anyhow::Result<LintResult> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let extractor = match MemberExtractor::for_extension(ext) {
        Some(e) => e,
        None => {
            let mut result = LintResult::new();
            result.scanned = 1;
            return Ok(result);
        }
    };

    let parsed = extractor.parse(path, source)?;
    let facts = extractor.extract_members(&parsed)?;
    Ok(check_members(&facts, config))
}

/// Read a file from disk and run the rule over it.
pub fn check_file(path: &Path, config: &Config) -> anyhow::Result<LintResult> {
    let source = fs::read(path)?;
    check_source(path, &source, config)
}

/// Apply the suggested edits for one file in place.
///
/// Returns the number of edits applied. Only called on explicit request.
pub fn fix_file(path: &Path, diagnostics: &[Diagnostic]) -> anyhow::Result<usize> {
    let edits: Vec<TextEdit> = diagnostics
        .iter()
        .map(|d| d.suggestion.edit.clone())
        .collect();
    if edits.is_empty() {
        return Ok(0);
    }

    let source = fs::read_to_string(path)?;
    let fixed = apply_edits(&source, &edits);
    fs::write(path, fixed)?;
    Ok(edits.len())
}
