//! TypeScript class member extraction using tree-sitter.

use std::path::Path;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor};

use crate::analysis::{FileMembers, MemberBody, MemberDeclaration, MemberKind, ParsedFile, Span};

/// Members with a potential body are `method_definition` nodes; overload and
/// ambient signatures parse as `method_signature`/`abstract_method_signature`.
const MEMBER_QUERY: &str = r#"
(class_body (method_definition) @member)
(class_body (method_signature) @signature)
(class_body (abstract_method_signature) @signature)
"#;

/// Extracts class member declarations from TypeScript sources.
pub struct MemberExtractor {
    language: Language,
}

impl MemberExtractor {
    /// Extractor for plain TypeScript (`.ts`, `.mts`).
    pub fn typescript() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }

    /// Extractor for TSX (`.tsx`).
    pub fn tsx() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Select an extractor by file extension (without dot).
    pub fn for_extension(ext: &str) -> Option<Self> {
        match ext {
            "ts" | "mts" => Some(Self::typescript()),
            "tsx" => Some(Self::tsx()),
            _ => None,
        }
    }

    /// File extensions handled by any extractor.
    pub fn supported_extensions() -> &'static [&'static str] {
        &["ts", "tsx", "mts"]
    }

    fn create_parser(&self) -> anyhow::Result<Parser> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        Ok(parser)
    }

    /// Parse a source file into a tree-sitter tree.
    ///
    /// Partial parse errors still produce a valid tree with ERROR nodes;
    /// extraction proceeds on whatever parsed cleanly.
    pub fn parse(&self, path: &Path, source: &[u8]) -> anyhow::Result<ParsedFile> {
        let mut parser = self.create_parser()?;
        let tree = parser.parse(source, None).ok_or_else(|| {
            anyhow::anyhow!("failed to parse TypeScript source: {}", path.display())
        })?;

        Ok(ParsedFile {
            tree,
            source: source.to_vec(),
            path: path.to_string_lossy().to_string(),
        })
    }

    /// Extract all class members from a parsed file, in lexical order.
    pub fn extract_members(&self, parsed: &ParsedFile) -> anyhow::Result<FileMembers> {
        let query = Query::new(&self.language, MEMBER_QUERY)?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, parsed.tree.root_node(), &parsed.source[..]);

        let mut members = Vec::new();

        while let Some(m) = matches.next() {
            for capture in m.captures {
                let capture_name = query.capture_names()[capture.index as usize];
                let has_body_node = capture_name == "member";
                if let Some(member) = self.member_from_node(parsed, capture.node, has_body_node) {
                    members.push(member);
                }
            }
        }

        members.sort_by_key(|m| m.span.start_byte);

        Ok(FileMembers {
            path: parsed.path.clone(),
            members,
            has_parse_errors: parsed.tree.root_node().has_error(),
        })
    }

    fn member_from_node(
        &self,
        parsed: &ParsedFile,
        node: Node,
        has_body_node: bool,
    ) -> Option<MemberDeclaration> {
        let name_node = node.child_by_field_name("name")?;
        let name = parsed.node_text(name_node).to_string();

        let mut is_override = false;
        let mut accessor = None;
        for child in node.children(&mut node.walk()) {
            match child.kind() {
                "override_modifier" => is_override = true,
                // The accessor keyword is an anonymous token preceding the
                // name; a method literally named `get` is a named node.
                "get" | "set" if !child.is_named() && child.start_byte() < name_node.start_byte() => {
                    accessor = Some(child.kind());
                }
                _ => {}
            }
        }

        let kind = match accessor {
            Some("get") => MemberKind::Getter,
            Some("set") => MemberKind::Setter,
            _ if name_node.kind() == "property_identifier" && name == "constructor" => {
                MemberKind::Constructor
            }
            _ => MemberKind::Method,
        };

        let parameters = match node.child_by_field_name("parameters") {
            Some(params) => params
                .named_children(&mut params.walk())
                .filter(|p| p.kind() != "comment")
                .map(|p| parsed.node_text(p).to_string())
                .collect(),
            None => Vec::new(),
        };

        let body = if has_body_node {
            node.child_by_field_name("body")
                .map(|b| self.extract_body(parsed, b))
        } else {
            None
        };

        Some(MemberDeclaration {
            name,
            kind,
            is_override,
            parameters,
            span: Span::from_node(node),
            body,
        })
    }

    fn extract_body(&self, parsed: &ParsedFile, body_node: Node) -> MemberBody {
        let first_token_offset = body_node
            .children(&mut body_node.walk())
            .find(|n| !matches!(n.kind(), "{" | "}" | "comment"))
            .map(|n| n.start_byte());

        MemberBody {
            span: Span::from_node(body_node),
            text: parsed.node_text(body_node).to_string(),
            first_token_offset,
        }
    }
}

impl Default for MemberExtractor {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ts(source: &str) -> (MemberExtractor, ParsedFile) {
        let extractor = MemberExtractor::typescript();
        let parsed = extractor
            .parse(Path::new("test.ts"), source.as_bytes())
            .unwrap();
        (extractor, parsed)
    }

    fn extract(source: &str) -> FileMembers {
        let (extractor, parsed) = parse_ts(source);
        extractor.extract_members(&parsed).unwrap()
    }

    #[test]
    fn test_override_modifier_detection() {
        let facts = extract(
            r#"
class Widget extends Base {
    render(): void {}
    override paint(): void {}
}
"#,
        );

        let render = facts.find_member("render").unwrap();
        assert!(!render.is_override);

        let paint = facts.find_member("paint").unwrap();
        assert!(paint.is_override);
    }

    #[test]
    fn test_member_kinds() {
        let facts = extract(
            r#"
class Widget extends Base {
    constructor() { super(); }
    get size(): number { return 0; }
    set size(v: number) {}
    resize(w: number, h: number): void {}
}
"#,
        );

        assert_eq!(
            facts.find_member("constructor").unwrap().kind,
            MemberKind::Constructor
        );
        let kinds: Vec<MemberKind> = facts
            .members
            .iter()
            .filter(|m| m.name == "size")
            .map(|m| m.kind)
            .collect();
        assert_eq!(kinds, vec![MemberKind::Getter, MemberKind::Setter]);
        assert_eq!(facts.find_member("resize").unwrap().kind, MemberKind::Method);
    }

    #[test]
    fn test_method_named_get_is_not_accessor() {
        let facts = extract(
            r#"
class Store extends Base {
    override get(key: string): string { return ""; }
}
"#,
        );

        let get = facts.find_member("get").unwrap();
        assert_eq!(get.kind, MemberKind::Method);
        assert_eq!(get.parameters, vec!["key: string".to_string()]);
    }

    #[test]
    fn test_parameters_keep_full_source_text() {
        let facts = extract(
            r#"
class Widget extends Base {
    override update(a, b = 2, ...rest): void {}
}
"#,
        );

        let update = facts.find_member("update").unwrap();
        assert_eq!(
            update.parameters,
            vec!["a".to_string(), "b = 2".to_string(), "...rest".to_string()]
        );
    }

    #[test]
    fn test_body_first_token_offset() {
        let source = r#"
class Widget extends Base {
    override paint(): void { doWork(); }
    override clear(): void {}
    override flush(): void { /* later */ }
}
"#;
        let facts = extract(source);

        let paint = facts.find_member("paint").unwrap();
        let body = paint.body.as_ref().unwrap();
        let offset = body.first_token_offset.unwrap();
        assert_eq!(&source[offset..offset + 9], "doWork();");

        let clear = facts.find_member("clear").unwrap();
        assert!(clear.body.as_ref().unwrap().is_empty());

        // A comment is not a token.
        let flush = facts.find_member("flush").unwrap();
        let body = flush.body.as_ref().unwrap();
        assert!(body.is_empty());
        assert_eq!(body.text, "{ /* later */ }");
    }

    #[test]
    fn test_overload_signature_has_no_body() {
        let facts = extract(
            r#"
class Widget extends Base {
    override paint(depth: number): void;
    override paint(depth: number): void { doWork(); }
}
"#,
        );

        let paints: Vec<&MemberDeclaration> = facts
            .members
            .iter()
            .filter(|m| m.name == "paint")
            .collect();
        assert_eq!(paints.len(), 2);
        assert!(!paints[0].has_body());
        assert!(paints[1].has_body());
    }

    #[test]
    fn test_abstract_signature_has_no_body() {
        let facts = extract(
            r#"
abstract class Widget extends Base {
    abstract override paint(): void;
}
"#,
        );

        let paint = facts.find_member("paint").unwrap();
        assert!(paint.is_override);
        assert!(!paint.has_body());
    }

    #[test]
    fn test_computed_name_kept_verbatim() {
        let facts = extract(
            r#"
class Widget extends Base {
    override [Symbol.iterator]() { return iter(); }
}
"#,
        );

        let member = facts.find_member("[Symbol.iterator]").unwrap();
        assert!(member.is_override);
        assert_eq!(member.kind, MemberKind::Method);
    }

    #[test]
    fn test_setter_without_parameter() {
        let facts = extract(
            r#"
class Widget extends Base {
    override set value() {}
}
"#,
        );

        let value = facts.find_member("value").unwrap();
        assert_eq!(value.kind, MemberKind::Setter);
        assert!(value.parameters.is_empty());
    }

    #[test]
    fn test_interface_members_are_not_overrides() {
        let facts = extract(
            r#"
interface Paintable {
    paint(): void;
}
"#,
        );

        // Interface members sit outside class bodies and are not extracted.
        assert!(facts.members.is_empty());
    }

    #[test]
    fn test_tsx_extraction() {
        let extractor = MemberExtractor::tsx();
        let parsed = extractor
            .parse(
                Path::new("test.tsx"),
                br#"
class View extends Component {
    override render() { return <div/>; }
}
"#,
            )
            .unwrap();
        let facts = extractor.extract_members(&parsed).unwrap();

        let render = facts.find_member("render").unwrap();
        assert!(render.is_override);
        assert!(render.has_body());
    }
}
