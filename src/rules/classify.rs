//! Argument classification.
//!
//! Pure: the outcome depends only on the argument's declared type or the
//! symbol it references, never on its position in the list. An argument
//! maps to at most one kind (the first catalog rule that matches), and an
//! argument matching nothing simply contributes no rewrite.

use crate::core::callsites::CallArg;

use super::{ArgMatcher, RewriteRule};

/// The first catalog rule that recognizes this argument, if any.
pub fn classify<'r>(rules: &'r [RewriteRule], arg: &CallArg) -> Option<&'r RewriteRule> {
    rules.iter().find(|rule| rule_matches(rule, arg))
}

fn rule_matches(rule: &RewriteRule, arg: &CallArg) -> bool {
    match &rule.matcher {
        ArgMatcher::Symbol(name) => arg.symbol.as_deref() == Some(name.as_str()),
        ArgMatcher::Type(pattern) => arg.desc.as_ref().is_some_and(|desc| pattern.matches(desc)),
    }
}

#[cfg(test)]
mod tests {
    use swc_common::DUMMY_SP;

    use super::*;
    use crate::core::types::{DeclKind, NamedType, TypeDesc};
    use crate::rules::{ArgKind, catalog};

    fn arg_with_desc(desc: TypeDesc) -> CallArg {
        CallArg {
            span: DUMMY_SP,
            desc: Some(desc),
            symbol: None,
        }
    }

    fn arg_with_symbol(name: &str) -> CallArg {
        CallArg {
            span: DUMMY_SP,
            desc: None,
            symbol: Some(name.to_string()),
        }
    }

    fn class_ref(name: &str) -> TypeDesc {
        TypeDesc::Reference(NamedType::new(name, DeclKind::Class))
    }

    #[test]
    fn classifies_the_expand_flag_by_symbol() {
        let rules = catalog("AutoExpand");
        let arg = arg_with_symbol("AutoExpand");
        assert_eq!(classify(&rules, &arg).map(|r| r.kind), Some(ArgKind::ExpandFlag));

        let other = arg_with_symbol("AutoCollapse");
        assert!(classify(&rules, &other).is_none());
    }

    #[test]
    fn classifies_by_declared_type() {
        let rules = catalog("AutoExpand");
        let cases = [
            (class_ref("Decoration"), ArgKind::Decoration),
            (class_ref("StatusIcon"), ArgKind::Decoration),
            (
                TypeDesc::Named(NamedType::new("LinkError", DeclKind::Enum)),
                ArgKind::ErrorCode,
            ),
            (class_ref("TimePoint"), ArgKind::TimePoint),
            (class_ref("Device"), ArgKind::Device),
            (class_ref("Connection"), ArgKind::Connection),
            (
                TypeDesc::Collection(Box::new(class_ref("Device"))),
                ArgKind::DeviceList,
            ),
            (
                TypeDesc::Collection(Box::new(class_ref("Connection"))),
                ArgKind::ConnectionList,
            ),
        ];
        for (desc, expected) in cases {
            let arg = arg_with_desc(desc);
            assert_eq!(classify(&rules, &arg).map(|r| r.kind), Some(expected));
        }
    }

    #[test]
    fn classifies_derived_device_types() {
        let rules = catalog("AutoExpand");
        let arg = arg_with_desc(TypeDesc::Reference(NamedType::with_ancestry(
            "BleScanner",
            vec!["Device".to_string()],
        )));
        assert_eq!(classify(&rules, &arg).map(|r| r.kind), Some(ArgKind::Device));
    }

    #[test]
    fn unmatched_arguments_classify_to_none() {
        let rules = catalog("AutoExpand");
        let unknown = arg_with_desc(TypeDesc::Named(NamedType::new("string", DeclKind::Primitive)));
        assert!(classify(&rules, &unknown).is_none());

        let untyped = CallArg {
            span: DUMMY_SP,
            desc: None,
            symbol: None,
        };
        assert!(classify(&rules, &untyped).is_none());
    }

    #[test]
    fn classification_is_idempotent() {
        let rules = catalog("AutoExpand");
        let arg = arg_with_desc(class_ref("Device"));
        let first = classify(&rules, &arg).map(|r| r.kind);
        let second = classify(&rules, &arg).map(|r| r.kind);
        assert_eq!(first, second);
    }
}
