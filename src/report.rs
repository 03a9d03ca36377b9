//! Output formatting for supercheck results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::rule::{Diagnostic, LintResult};

// =============================================================================
// JSON Format
// =============================================================================

/// Top-level JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub config: String,
    pub files_scanned: usize,
    pub diagnostics: Vec<JsonDiagnostic>,
    pub diagnostic_count: usize,
}

/// One diagnostic with its suggested edit.
#[derive(Serialize, Deserialize)]
pub struct JsonDiagnostic {
    pub rule: String,
    pub severity: String,
    pub file: String,
    pub line: usize,
    pub message: String,
    pub suggestion: JsonSuggestion,
}

/// The suggested text edit, as byte range plus replacement text.
#[derive(Serialize, Deserialize)]
pub struct JsonSuggestion {
    pub start_byte: usize,
    pub end_byte: usize,
    pub replacement: String,
}

/// Build the JSON report structure.
pub fn json_report(path: &str, config_path: &str, result: &LintResult) -> JsonReport {
    let diagnostics: Vec<JsonDiagnostic> =
        result.diagnostics.iter().map(diagnostic_to_json).collect();

    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        config: config_path.to_string(),
        files_scanned: result.scanned,
        diagnostic_count: diagnostics.len(),
        diagnostics,
    }
}

/// Write results in JSON format.
pub fn write_json(path: &str, config_path: &str, result: &LintResult) -> anyhow::Result<()> {
    let report = json_report(path, config_path, result);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

fn diagnostic_to_json(d: &Diagnostic) -> JsonDiagnostic {
    JsonDiagnostic {
        rule: d.rule.as_str().to_string(),
        severity: d.severity.to_string(),
        file: d.file.clone(),
        line: d.line,
        message: d.message.clone(),
        suggestion: JsonSuggestion {
            start_byte: d.suggestion.edit.start_byte,
            end_byte: d.suggestion.edit.end_byte,
            replacement: d.suggestion.edit.replacement.clone(),
        },
    }
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(path: &str, config_path: &str, result: &LintResult) {
    // Header
    println!();
    print!("  ");
    print!("{}", "supercheck".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Scanning: ".dimmed());
    println!("{}", path);
    print!("  {}", "Config:   ".dimmed());
    println!("{}", config_path);
    println!();

    if result.diagnostics.is_empty() {
        print!("  {}", "✓ CLEAN".green());
        println!(
            "  {} files scanned, no missing super calls",
            result.scanned
        );
        println!();
        return;
    }

    for d in &result.diagnostics {
        write_diagnostic(d);
    }

    println!();
    print!("  {}", "✗".red());
    println!(
        " {} missing super call{} in {} file{} scanned",
        result.diagnostics.len(),
        plural(result.diagnostics.len()),
        result.scanned,
        plural(result.scanned)
    );
    println!();
}

fn write_diagnostic(d: &Diagnostic) {
    print!("  {}:{}: ", d.file.bold(), d.line);
    print!("{}", d.severity.to_string().yellow());
    println!(": {}", d.message);

    let preview = d.suggestion.edit.replacement.trim_end();
    println!("    {} {}", "suggested fix:".dimmed(), preview.green());
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
