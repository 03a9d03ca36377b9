//! Supercheck - a "call super on override" lint for TypeScript.
//!
//! Supercheck flags class methods, getters, and setters marked `override`
//! and offers a suggested fix that inserts the missing call through to the
//! identically-named base class member as the first statement of the body.
//! It deliberately does not look for an existing super call: the override
//! modifier alone triggers the report.
//!
//! # Architecture
//!
//! The codebase uses tree-sitter for AST-based analysis:
//!
//! - `analysis`: TypeScript class member extraction
//! - `rule`: the scanner, call-signature rendering, and fix synthesis
//! - `config`: YAML configuration (per-kind suppression, path exclusion)
//! - `report`: output formatting (pretty, JSON)
//! - `cli`: command-line driver
//!
//! The rule core in `rule` is host-independent: it consumes extracted
//! member facts and produces diagnostics with a single text edit each,
//! without ever touching the parse tree or the filesystem.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod report;
pub mod rule;

pub use analysis::{
    FileMembers, MemberBody, MemberDeclaration, MemberExtractor, MemberKind, ParsedFile, Span,
};
pub use config::Config;
pub use rule::{Diagnostic, LintResult, RuleId, Severity, Suggestion, TextEdit};
