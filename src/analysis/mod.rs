//! AST-backed member extraction.
//!
//! This module turns TypeScript sources into member facts using tree-sitter:
//! for every class member it records the rendered name, the member kind
//! (method, getter, setter, constructor), the override modifier, parameter
//! source fragments, and body layout. The rule module consumes these facts
//! without ever touching the parse tree.

mod facts;
mod typescript;

pub use facts::{FileMembers, MemberBody, MemberDeclaration, MemberKind, Span};
pub use typescript::MemberExtractor;

/// Holds a parsed tree-sitter tree and associated metadata.
///
/// Kept separate from [`FileMembers`] so the tree can be reused for several
/// extraction passes without re-parsing.
pub struct ParsedFile {
    /// The tree-sitter parse tree.
    pub tree: tree_sitter::Tree,
    /// The original source code (kept for node text extraction).
    pub source: Vec<u8>,
    /// The file path (for error reporting).
    pub path: String,
}

impl ParsedFile {
    /// Get the source code as a string slice.
    pub fn source_str(&self) -> &str {
        std::str::from_utf8(&self.source).unwrap_or("")
    }

    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: tree_sitter::Node) -> &str {
        node.utf8_text(&self.source).unwrap_or("")
    }
}
