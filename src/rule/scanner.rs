//! Decides which class members warrant a report.

use crate::analysis::{MemberDeclaration, MemberKind};
use crate::config::Config;

/// Whether a member should be reported for a missing super call.
///
/// Skips non-override members, constructors, members without a body
/// (overload and ambient signatures have nothing to insert into), and kinds
/// suppressed by configuration. The body is not searched for an existing
/// super call; the override modifier alone triggers the report.
pub fn should_report(member: &MemberDeclaration, config: &Config) -> bool {
    if !member.is_override {
        return false;
    }
    if member.kind == MemberKind::Constructor {
        return false;
    }
    if !member.has_body() {
        return false;
    }
    !config.is_ignored(member.kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{MemberBody, Span};

    fn span() -> Span {
        Span {
            start_byte: 0,
            end_byte: 20,
            start_line: 1,
            start_col: 1,
            end_line: 1,
            end_col: 21,
        }
    }

    fn member(kind: MemberKind, is_override: bool, with_body: bool) -> MemberDeclaration {
        MemberDeclaration {
            name: "m".to_string(),
            kind,
            is_override,
            parameters: vec![],
            span: span(),
            body: with_body.then(|| MemberBody {
                span: span(),
                text: "{ doWork(); }".to_string(),
                first_token_offset: Some(2),
            }),
        }
    }

    #[test]
    fn test_reports_override_with_body() {
        let config = Config::default();
        assert!(should_report(&member(MemberKind::Method, true, true), &config));
        assert!(should_report(&member(MemberKind::Getter, true, true), &config));
        assert!(should_report(&member(MemberKind::Setter, true, true), &config));
    }

    #[test]
    fn test_skips_non_override() {
        let config = Config::default();
        assert!(!should_report(&member(MemberKind::Method, false, true), &config));
    }

    #[test]
    fn test_skips_constructor_even_if_flagged_override() {
        let config = Config::default();
        assert!(!should_report(
            &member(MemberKind::Constructor, true, true),
            &config
        ));
    }

    #[test]
    fn test_skips_bodyless_member() {
        let config = Config::default();
        assert!(!should_report(&member(MemberKind::Method, true, false), &config));
    }

    #[test]
    fn test_per_kind_suppression_is_independent() {
        let config = Config {
            ignore_getters: true,
            ..Config::default()
        };
        assert!(!should_report(&member(MemberKind::Getter, true, true), &config));
        assert!(should_report(&member(MemberKind::Method, true, true), &config));
        assert!(should_report(&member(MemberKind::Setter, true, true), &config));
    }
}
