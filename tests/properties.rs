//! Property tests for type extraction

use proptest::prelude::*;
use tagtype::application::{ExtractTypeTransform, TagTransform};
use tagtype::domain::{Tag, TagValue};

fn extract(value: &str) -> (Tag, TagValue) {
    let mut tag = Tag::new("param", None);
    let result = ExtractTypeTransform::default()
        .transform(&mut tag, TagValue::from(value))
        .unwrap();
    (tag, result)
}

proptest! {
    #[test]
    fn text_without_brace_is_unchanged(value in "[^{]{0,40}") {
        let (tag, result) = extract(&value);
        prop_assert_eq!(result, TagValue::from(value.as_str()));
        prop_assert_eq!(tag, Tag::new("param", None));
    }

    #[test]
    fn inline_tags_are_unchanged(ws in "[ \t]{0,3}", rest in "[a-z ]{0,20}\\}?") {
        let value = format!("{}{{@{}", ws, rest);
        let (tag, result) = extract(&value);
        prop_assert_eq!(result, TagValue::from(value.as_str()));
        prop_assert!(tag.type_expression.is_none());
    }

    #[test]
    fn single_name_round_trips(
        name in "[a-zA-Z_$][a-zA-Z0-9_$]{0,10}",
        desc in "[a-z][a-z ]{0,20}",
    ) {
        let (tag, result) = extract(&format!("{{{}}} {}", name, desc));
        prop_assert_eq!(tag.type_expression.as_deref(), Some(name.as_str()));
        prop_assert_eq!(tag.type_list, Some(vec![name.clone()]));
        prop_assert_eq!(result, TagValue::from(desc.trim()));
    }

    #[test]
    fn union_members_keep_order(names in prop::collection::vec("[a-zA-Z][a-zA-Z0-9]{0,8}", 2..6)) {
        let (tag, _) = extract(&format!("{{({})}} x", names.join("|")));
        prop_assert_eq!(tag.type_list, Some(names));
    }

    #[test]
    fn rerun_on_description_is_noop(
        name in "[a-zA-Z][a-zA-Z0-9]{0,8}",
        desc in "[a-z ]{0,20}",
    ) {
        let transform = ExtractTypeTransform::default();
        let mut tag = Tag::new("param", None);

        let first = transform
            .transform(&mut tag, TagValue::from(format!("{{{}}} {}", name, desc)))
            .unwrap();
        let snapshot = tag.clone();
        let second = transform.transform(&mut tag, first.clone()).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(tag, snapshot);
    }

    #[test]
    fn description_excludes_braced_span(
        name in "[a-zA-Z][a-zA-Z0-9]{0,8}",
        desc in "[a-z][a-z ]{0,20}",
    ) {
        let (tag, _) = extract(&format!("{{{}}} {}", name, desc));
        let description = tag.description.unwrap_or_default();
        prop_assert!(!description.contains('{'), "description contains '{{'");
        prop_assert!(!description.contains('}'), "description contains '}}'");
    }
}
