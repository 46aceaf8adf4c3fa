//! Fixture-driven extraction tests.
//!
//! Cases live in `tests/fixtures/extract_cases.toml`; each names a tag value
//! and the fields extraction should produce from it.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tagtype::application::{ExtractTypeTransform, TagTransform};
use tagtype::domain::{Tag, TagValue};
use tagtype::TagTypeError;

#[derive(Debug, Deserialize)]
struct Cases {
    #[serde(rename = "case")]
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    value: String,
    type_expression: Option<String>,
    type_list: Option<Vec<String>>,
    description: Option<String>,
    optional: Option<bool>,
    error: Option<String>,
    #[serde(default)]
    unchanged: bool,
}

#[test]
fn test_extract_fixtures() {
    let path = Path::new("tests").join("fixtures").join("extract_cases.toml");
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    let cases: Cases = toml::from_str(&content)
        .unwrap_or_else(|e| panic!("Invalid fixture TOML in {}: {}", path.display(), e));
    assert!(!cases.cases.is_empty(), "No extraction cases found");

    for case in &cases.cases {
        run_case(case);
    }
}

fn run_case(case: &Case) {
    let transform = ExtractTypeTransform::default();
    let mut tag = Tag::new("param", None);
    let result = transform.transform(&mut tag, TagValue::from(case.value.as_str()));

    if let Some(expected) = &case.type_expression {
        assert_eq!(
            tag.type_expression.as_ref(),
            Some(expected),
            "Case '{}': typeExpression mismatch",
            case.name
        );
    }

    match (&case.error, result) {
        (Some(kind), Err(err)) => {
            let matches = match kind.as_str() {
                "parse" => matches!(err, TagTypeError::TypeExpressionParse { .. }),
                "unterminated" => matches!(err, TagTypeError::UnterminatedTypeExpression(_)),
                other => panic!("Case '{}': unknown error kind {:?}", case.name, other),
            };
            assert!(matches, "Case '{}': expected {} error, got {:?}", case.name, kind, err);
        }
        (Some(kind), Ok(value)) => {
            panic!("Case '{}': expected {} error, got {:?}", case.name, kind, value)
        }
        (None, Err(err)) => panic!("Case '{}': unexpected error: {}", case.name, err),
        (None, Ok(value)) => {
            if case.unchanged {
                assert_eq!(
                    value,
                    TagValue::from(case.value.as_str()),
                    "Case '{}': value should pass through",
                    case.name
                );
                assert_eq!(tag, Tag::new("param", None), "Case '{}': tag touched", case.name);
                return;
            }

            let type_list = tag.type_list.clone().unwrap_or_default();
            assert!(
                !type_list.is_empty(),
                "Case '{}': typeList must be set when a type is present",
                case.name
            );
            assert_eq!(
                value,
                TagValue::Text(tag.description.clone().unwrap_or_default()),
                "Case '{}': returned value must be the description",
                case.name
            );

            if let Some(expected) = &case.type_list {
                assert_eq!(&type_list, expected, "Case '{}': typeList mismatch", case.name);
            }
            if let Some(expected) = &case.description {
                assert_eq!(
                    tag.description.as_ref(),
                    Some(expected),
                    "Case '{}': description mismatch",
                    case.name
                );
            }
            if let Some(expected) = case.optional {
                assert_eq!(tag.optional, expected, "Case '{}': optional mismatch", case.name);
            }
        }
    }
}
