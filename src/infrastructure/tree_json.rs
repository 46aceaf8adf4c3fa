//! Type trees in the catharsis JSON shape
//!
//! ```json
//! {"type": "TypeUnion", "elements": [{"type": "NameExpression", "name": "string"}]}
//! ```
//!
//! Trees produced elsewhere enter the crate through [`decode_type_tree`],
//! so this is where an unknown node kind is caught.

use crate::domain::types::{FieldType, TypeKind, TypeNode};
use crate::error::{Result, TagTypeError};
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

/// Decode a catharsis-shaped JSON value into a type tree
pub fn decode_type_tree(value: &Value) -> Result<TypeNode> {
    let object = value
        .as_object()
        .ok_or_else(|| TagTypeError::InvalidTypeTree(format!("expected an object, got {}", value)))?;

    let kind_name = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| TagTypeError::InvalidTypeTree(format!("node has no \"type\": {}", value)))?;

    let kind = match kind_name {
        "AllLiteral" => TypeKind::AllLiteral,
        "NullLiteral" => TypeKind::NullLiteral,
        "UndefinedLiteral" => TypeKind::UndefinedLiteral,
        "UnknownLiteral" => TypeKind::UnknownLiteral,
        "NameExpression" => TypeKind::NameExpression {
            name: required_str(object, "name")?.to_string(),
        },
        "TypeUnion" => {
            let elements = decode_list(object, "elements")?;
            if elements.is_empty() {
                return Err(TagTypeError::InvalidTypeTree(
                    "TypeUnion has no elements".to_string(),
                ));
            }
            TypeKind::TypeUnion { elements }
        }
        "TypeApplication" => TypeKind::TypeApplication {
            expression: Box::new(decode_type_tree(required(object, "expression")?)?),
            applications: decode_list(object, "applications")?,
        },
        "FunctionType" => TypeKind::FunctionType {
            params: match object.get("params") {
                Some(_) => decode_list(object, "params")?,
                None => Vec::new(),
            },
            result: decode_optional(object, "result")?,
            this: decode_optional(object, "this")?,
            new: decode_optional(object, "new")?,
        },
        "RecordType" => {
            let fields = required(object, "fields")?
                .as_array()
                .ok_or_else(|| TagTypeError::InvalidTypeTree("\"fields\" is not an array".to_string()))?
                .iter()
                .map(decode_field)
                .collect::<Result<Vec<_>>>()?;
            TypeKind::RecordType { fields }
        }
        other => {
            return Err(TagTypeError::UnrecognizedTypeKind {
                kind: other.to_string(),
                node: value.to_string(),
            })
        }
    };

    Ok(TypeNode {
        kind,
        optional: flag(object, "optional"),
        nullable: object.get("nullable").and_then(Value::as_bool),
        repeatable: flag(object, "repeatable"),
    })
}

/// Encode a type tree in the catharsis JSON shape
pub fn encode_type_tree(node: &TypeNode) -> Value {
    let mut object = Map::new();
    object.insert("type".to_string(), json!(node.kind_name()));

    match &node.kind {
        TypeKind::AllLiteral
        | TypeKind::NullLiteral
        | TypeKind::UndefinedLiteral
        | TypeKind::UnknownLiteral => {}
        TypeKind::NameExpression { name } => {
            object.insert("name".to_string(), json!(name));
        }
        TypeKind::TypeUnion { elements } => {
            object.insert("elements".to_string(), encode_list(elements));
        }
        TypeKind::TypeApplication {
            expression,
            applications,
        } => {
            object.insert("expression".to_string(), encode_type_tree(expression));
            object.insert("applications".to_string(), encode_list(applications));
        }
        TypeKind::FunctionType {
            params,
            result,
            this,
            new,
        } => {
            object.insert("params".to_string(), encode_list(params));
            if let Some(result) = result {
                object.insert("result".to_string(), encode_type_tree(result));
            }
            if let Some(this) = this {
                object.insert("this".to_string(), encode_type_tree(this));
            }
            if let Some(new) = new {
                object.insert("new".to_string(), encode_type_tree(new));
            }
        }
        TypeKind::RecordType { fields } => {
            let fields = fields
                .iter()
                .map(|field| {
                    json!({
                        "type": "FieldType",
                        "key": { "type": "NameExpression", "name": field.key },
                        "value": field.value.as_ref().map(encode_type_tree),
                    })
                })
                .collect();
            object.insert("fields".to_string(), Value::Array(fields));
        }
    }

    if node.optional {
        object.insert("optional".to_string(), json!(true));
    }
    if let Some(nullable) = node.nullable {
        object.insert("nullable".to_string(), json!(nullable));
    }
    if node.repeatable {
        object.insert("repeatable".to_string(), json!(true));
    }

    Value::Object(object)
}

impl Serialize for TypeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        encode_type_tree(self).serialize(serializer)
    }
}

fn decode_field(value: &Value) -> Result<FieldType> {
    let object = value
        .as_object()
        .ok_or_else(|| TagTypeError::InvalidTypeTree(format!("expected a field, got {}", value)))?;

    // catharsis wraps keys in a NameExpression; accept a bare string too
    let key = match required(object, "key")? {
        Value::String(key) => key.clone(),
        Value::Object(key) => required_str(key, "name")?.to_string(),
        other => {
            return Err(TagTypeError::InvalidTypeTree(format!(
                "invalid field key: {}",
                other
            )))
        }
    };

    let value = match object.get("value") {
        None | Some(Value::Null) => None,
        Some(value) => Some(decode_type_tree(value)?),
    };

    Ok(FieldType { key, value })
}

fn decode_list(object: &Map<String, Value>, field: &str) -> Result<Vec<TypeNode>> {
    required(object, field)?
        .as_array()
        .ok_or_else(|| TagTypeError::InvalidTypeTree(format!("\"{}\" is not an array", field)))?
        .iter()
        .map(decode_type_tree)
        .collect()
}

fn decode_optional(object: &Map<String, Value>, field: &str) -> Result<Option<Box<TypeNode>>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(Box::new(decode_type_tree(value)?))),
    }
}

fn encode_list(nodes: &[TypeNode]) -> Value {
    Value::Array(nodes.iter().map(encode_type_tree).collect())
}

fn required<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a Value> {
    object
        .get(field)
        .ok_or_else(|| TagTypeError::InvalidTypeTree(format!("missing \"{}\"", field)))
}

fn required_str<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a str> {
    required(object, field)?
        .as_str()
        .ok_or_else(|| TagTypeError::InvalidTypeTree(format!("\"{}\" is not a string", field)))
}

fn flag(object: &Map<String, Value>, field: &str) -> bool {
    object.get(field).and_then(Value::as_bool).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{JsDocGrammar, ParseOptions, TypeGrammar};

    #[test]
    fn test_decode_union_with_modifiers() {
        let value = json!({
            "type": "TypeUnion",
            "elements": [
                {"type": "NameExpression", "name": "string"},
                {"type": "NullLiteral"}
            ],
            "optional": true
        });
        let node = decode_type_tree(&value).unwrap();
        assert!(node.optional);
        assert_eq!(node.to_string(), "(string|null)=");
    }

    #[test]
    fn test_decode_catharsis_record_and_function() {
        let value = json!({
            "type": "FunctionType",
            "params": [{
                "type": "RecordType",
                "fields": [{
                    "type": "FieldType",
                    "key": {"type": "NameExpression", "name": "a"},
                    "value": {"type": "NameExpression", "name": "number"}
                }, {
                    "type": "FieldType",
                    "key": "b"
                }]
            }],
            "result": {"type": "AllLiteral"},
            "this": {"type": "NameExpression", "name": "Window", "nullable": false}
        });
        let node = decode_type_tree(&value).unwrap();
        assert_eq!(node.to_string(), "function(this:!Window, {a: number, b}): *");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let value = json!({"type": "TupleType", "elements": []});
        match decode_type_tree(&value) {
            Err(TagTypeError::UnrecognizedTypeKind { kind, node }) => {
                assert_eq!(kind, "TupleType");
                assert!(node.contains("TupleType"));
            }
            other => panic!("expected UnrecognizedTypeKind, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_nested_in_union() {
        let value = json!({
            "type": "TypeUnion",
            "elements": [{"type": "NameExpression", "name": "a"}, {"type": "Mystery"}]
        });
        assert!(matches!(
            decode_type_tree(&value),
            Err(TagTypeError::UnrecognizedTypeKind { .. })
        ));
    }

    #[test]
    fn test_malformed_nodes() {
        assert!(matches!(
            decode_type_tree(&json!({"type": "NameExpression"})),
            Err(TagTypeError::InvalidTypeTree(_))
        ));
        assert!(matches!(
            decode_type_tree(&json!({"name": "x"})),
            Err(TagTypeError::InvalidTypeTree(_))
        ));
        assert!(matches!(
            decode_type_tree(&json!({"type": "TypeUnion", "elements": []})),
            Err(TagTypeError::InvalidTypeTree(_))
        ));
        assert!(matches!(
            decode_type_tree(&json!("string")),
            Err(TagTypeError::InvalidTypeTree(_))
        ));
    }

    #[test]
    fn test_encoded_parse_tree_decodes_to_same_tree() {
        let node = JsDocGrammar
            .parse(
                "function(new:Foo, ...?string): {a: Array.<number>}=",
                &ParseOptions::jsdoc(),
            )
            .unwrap();
        let encoded = encode_type_tree(&node);
        assert_eq!(encoded["type"], "FunctionType");
        assert_eq!(decode_type_tree(&encoded).unwrap(), node);
    }

    #[test]
    fn test_serialize_uses_catharsis_shape() {
        let node = TypeNode::name("string").with_nullable(true);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, json!({"type": "NameExpression", "name": "string", "nullable": true}));
    }
}
