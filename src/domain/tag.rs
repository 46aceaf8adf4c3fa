//! Tag records and tag definitions

use crate::domain::types::TypeNode;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Metadata marking a tag name as recognized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDef {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl TagDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }
}

/// Registry of recognized tag definitions, keyed by name and alias
#[derive(Debug, Clone, Default)]
pub struct TagDefinitions {
    by_name: HashMap<String, Arc<TagDef>>,
}

impl TagDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition under its name and every alias
    pub fn register(&mut self, def: TagDef) {
        let def = Arc::new(def);
        for alias in &def.aliases {
            self.by_name.insert(alias.clone(), Arc::clone(&def));
        }
        self.by_name.insert(def.name.clone(), def);
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<TagDef>> {
        self.by_name.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagDefinitions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut defs = TagDefinitions::new();
        for name in iter {
            defs.register(TagDef::new(name.as_ref()));
        }
        defs
    }
}

/// A single tag occurrence in a documentation comment.
///
/// Transforms mutate the tag in place: extraction fills in the type fields
/// and the description, validation appends to `errors`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub tag_name: String,

    /// Present when the tag name is recognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_def: Option<Arc<TagDef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Raw text between the outermost braces, trimmed and unescaped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_expression: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_tree: Option<TypeNode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_list: Option<Vec<String>>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,

    /// Diagnostics accumulated across transforms; only ever appended to
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl Tag {
    pub fn new(tag_name: impl Into<String>, tag_def: Option<Arc<TagDef>>) -> Self {
        Self {
            tag_name: tag_name.into(),
            tag_def,
            description: None,
            type_expression: None,
            type_tree: None,
            type_list: None,
            optional: false,
            errors: Vec::new(),
        }
    }

    /// Create a tag, resolving its definition from the registry
    pub fn resolve(tag_name: &str, definitions: &TagDefinitions) -> Self {
        Self::new(tag_name, definitions.lookup(tag_name))
    }

    pub fn is_known(&self) -> bool {
        self.tag_def.is_some()
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }
}

/// The value flowing through a chain of tag transforms
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    /// Free text, the usual case
    Text(String),
    /// The whole tag record used as the value
    Tag(Box<Tag>),
    /// A transform that produces no value
    Absent,
}

impl TagValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for TagValue {
    fn from(text: &str) -> Self {
        TagValue::Text(text.to_string())
    }
}

impl From<String> for TagValue {
    fn from(text: String) -> Self {
        TagValue::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_resolves_names_and_aliases() {
        let mut defs = TagDefinitions::new();
        defs.register(TagDef::new("returns").with_aliases(&["return"]));

        let by_name = defs.lookup("returns").unwrap();
        let by_alias = defs.lookup("return").unwrap();
        assert!(Arc::ptr_eq(&by_name, &by_alias));
        assert!(defs.lookup("param").is_none());
        assert_eq!(defs.len(), 2);
    }

    #[test]
    fn test_tag_resolve_sets_capability() {
        let defs: TagDefinitions = ["param", "returns"].into_iter().collect();
        assert!(Tag::resolve("param", &defs).is_known());
        assert!(!Tag::resolve("bogus", &defs).is_known());
    }

    #[test]
    fn test_tag_serializes_camel_case_and_skips_unset() {
        let mut tag = Tag::new("param", Some(Arc::new(TagDef::new("param"))));
        tag.type_expression = Some("string".to_string());
        tag.type_list = Some(vec!["string".to_string()]);

        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(json["tagName"], "param");
        assert_eq!(json["typeExpression"], "string");
        assert_eq!(json["typeList"][0], "string");
        assert!(json.get("optional").is_none());
        assert!(json.get("errors").is_none());
        assert!(json.get("type").is_none());
    }

    #[test]
    fn test_tag_value_text_access() {
        assert_eq!(TagValue::from("x").as_text(), Some("x"));
        assert_eq!(TagValue::Absent.as_text(), None);
    }
}
