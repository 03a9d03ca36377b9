//! Member facts extracted from parsed class bodies.

use std::fmt;

/// Source location span with byte offsets and line/column positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (0-indexed).
    pub start_byte: usize,
    /// End byte offset (0-indexed, exclusive).
    pub end_byte: usize,
    /// Start line (1-indexed).
    pub start_line: usize,
    /// Start column (1-indexed).
    pub start_col: usize,
    /// End line (1-indexed).
    pub end_line: usize,
    /// End column (1-indexed).
    pub end_col: usize,
}

impl Span {
    /// Create a span from a tree-sitter node.
    pub fn from_node(node: tree_sitter::Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            start_line: start.row + 1, // tree-sitter is 0-indexed
            start_col: start.column + 1,
            end_line: end.row + 1,
            end_col: end.column + 1,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)
    }
}

/// Kind of class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Method,
    Getter,
    Setter,
    Constructor,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Method => "method",
            MemberKind::Getter => "getter",
            MemberKind::Setter => "setter",
            MemberKind::Constructor => "constructor",
        }
    }

    /// Check if this is an accessor (getter or setter).
    pub fn is_accessor(&self) -> bool {
        matches!(self, MemberKind::Getter | MemberKind::Setter)
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A member's body block.
#[derive(Debug, Clone)]
pub struct MemberBody {
    /// Span of the body block, braces included.
    pub span: Span,
    /// Raw text of the body block, braces included.
    pub text: String,
    /// Byte offset of the first token inside the braces, or `None` when the
    /// body holds no tokens (comments do not count as tokens).
    pub first_token_offset: Option<usize>,
}

impl MemberBody {
    /// Check if the body contains no tokens.
    pub fn is_empty(&self) -> bool {
        self.first_token_offset.is_none()
    }
}

/// A class member extracted from source code.
#[derive(Debug, Clone)]
pub struct MemberDeclaration {
    /// Raw source text of the declared name. Computed names such as
    /// `[Symbol.iterator]` are kept verbatim, not reduced to an identifier.
    pub name: String,
    /// The kind of member.
    pub kind: MemberKind,
    /// Whether the member carries an explicit `override` modifier.
    pub is_override: bool,
    /// Ordered raw source fragments of the declared parameters, full
    /// declaration text including type annotations and defaults.
    pub parameters: Vec<String>,
    /// Source span for the entire member.
    pub span: Span,
    /// Body information. `None` for ambient/overload signatures.
    pub body: Option<MemberBody>,
}

impl MemberDeclaration {
    /// Whether the member has a concrete body to insert into.
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

/// All class members extracted from a single file.
#[derive(Debug, Clone)]
pub struct FileMembers {
    /// File path.
    pub path: String,
    /// All class members in the file, in lexical order.
    pub members: Vec<MemberDeclaration>,
    /// Whether the file had parse errors.
    pub has_parse_errors: bool,
}

impl FileMembers {
    /// Create empty facts for a file.
    pub fn empty(path: &str) -> Self {
        Self {
            path: path.to_string(),
            members: Vec::new(),
            has_parse_errors: false,
        }
    }

    /// Find a member by its rendered name.
    pub fn find_member(&self, name: &str) -> Option<&MemberDeclaration> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Members carrying an explicit override modifier.
    pub fn overrides(&self) -> impl Iterator<Item = &MemberDeclaration> {
        self.members.iter().filter(|m| m.is_override)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> Span {
        Span {
            start_byte: 0,
            end_byte: 10,
            start_line: 1,
            start_col: 1,
            end_line: 1,
            end_col: 11,
        }
    }

    #[test]
    fn test_member_kind_accessors() {
        assert!(MemberKind::Getter.is_accessor());
        assert!(MemberKind::Setter.is_accessor());
        assert!(!MemberKind::Method.is_accessor());
        assert!(!MemberKind::Constructor.is_accessor());
    }

    #[test]
    fn test_body_emptiness() {
        let body = MemberBody {
            span: span(),
            text: "{}".to_string(),
            first_token_offset: None,
        };
        assert!(body.is_empty());

        let body = MemberBody {
            span: span(),
            text: "{ doWork(); }".to_string(),
            first_token_offset: Some(2),
        };
        assert!(!body.is_empty());
    }

    #[test]
    fn test_file_members_lookup() {
        let mut facts = FileMembers::empty("a.ts");
        facts.members.push(MemberDeclaration {
            name: "render".to_string(),
            kind: MemberKind::Method,
            is_override: true,
            parameters: vec![],
            span: span(),
            body: None,
        });

        assert!(facts.find_member("render").is_some());
        assert!(facts.find_member("paint").is_none());
        assert_eq!(facts.overrides().count(), 1);
    }
}
