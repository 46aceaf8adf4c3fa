//! Extracting a leading `{type}` expression from tag text
//!
//! For a value such as `{(string|number)} the id`, the tag ends up with:
//!
//! - `type_expression`: `(string|number)`
//! - `type_tree`: the parsed union
//! - `type_list`: `["string", "number"]`
//! - `description`: `the id`, which is also the transform's return value
//!
//! Values that do not start with a type expression pass through untouched.

use super::TagTransform;
use crate::domain::scanner::{self, unescape_braces, ScanOutcome};
use crate::domain::types::{flatten, JsDocGrammar, ParseOptions, TypeGrammar, TypeNode};
use crate::domain::{Tag, TagValue};
use crate::error::{Result, TagTypeError};
use crate::infrastructure::config::UnterminatedPolicy;
use std::sync::Arc;

/// A type expression located in a value, with the text around it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedExpression {
    pub expression: String,
    pub description: String,
}

/// Everything extraction derives from a value, before it touches the tag
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub type_expression: String,
    pub type_tree: TypeNode,
    pub type_list: Vec<String>,
    pub optional: bool,
    pub description: String,
}

#[derive(Clone)]
pub struct ExtractTypeTransform {
    grammar: Arc<dyn TypeGrammar>,
    options: ParseOptions,
    unterminated: UnterminatedPolicy,
}

impl Default for ExtractTypeTransform {
    fn default() -> Self {
        Self::new(Arc::new(JsDocGrammar))
    }
}

impl ExtractTypeTransform {
    pub fn new(grammar: Arc<dyn TypeGrammar>) -> Self {
        Self {
            grammar,
            options: ParseOptions::jsdoc(),
            unterminated: UnterminatedPolicy::default(),
        }
    }

    pub fn with_unterminated(mut self, policy: UnterminatedPolicy) -> Self {
        self.unterminated = policy;
        self
    }

    /// Find the type expression at the start of `value`, if any
    pub fn locate(&self, value: &str) -> Result<Option<LocatedExpression>> {
        match scanner::scan(value) {
            ScanOutcome::NotFound => Ok(None),
            ScanOutcome::Found(span) => Ok(Some(LocatedExpression {
                expression: span.expression(value),
                description: span.remainder(value),
            })),
            ScanOutcome::Unterminated { open } => match self.unterminated {
                UnterminatedPolicy::Error => {
                    Err(TagTypeError::UnterminatedTypeExpression(value.to_string()))
                }
                UnterminatedPolicy::ConsumeRest => {
                    tracing::debug!(value, "consuming unterminated type expression");
                    Ok(Some(LocatedExpression {
                        expression: unescape_braces(value[open + 1..].trim()),
                        description: value[..open].trim().to_string(),
                    }))
                }
            },
        }
    }

    /// Parse and flatten a located expression
    pub fn analyse(&self, tag_name: &str, located: LocatedExpression) -> Result<Extraction> {
        let type_tree = self
            .grammar
            .parse(&located.expression, &self.options)
            .map_err(|e| TagTypeError::TypeExpressionParse {
                expression: located.expression.clone(),
                tag_name: tag_name.to_string(),
                message: e.to_string(),
            })?;

        let type_list = flatten(&type_tree, self.grammar.as_ref());
        let optional = type_tree.optional;

        Ok(Extraction {
            type_expression: located.expression,
            type_tree,
            type_list,
            optional,
            description: located.description,
        })
    }

    /// Locate and analyse in one go, without touching any tag
    pub fn extract(&self, tag_name: &str, value: &str) -> Result<Option<Extraction>> {
        match self.locate(value)? {
            Some(located) => self.analyse(tag_name, located).map(Some),
            None => Ok(None),
        }
    }
}

/// Record an extraction on the tag; returns the new description
fn merge(tag: &mut Tag, extraction: Extraction) -> String {
    tag.type_expression = Some(extraction.type_expression);
    tag.type_tree = Some(extraction.type_tree);
    tag.type_list = Some(extraction.type_list);
    if extraction.optional {
        tag.optional = true;
    }
    tag.description = Some(extraction.description.clone());
    extraction.description
}

impl TagTransform for ExtractTypeTransform {
    fn name(&self) -> &'static str {
        "extract-type"
    }

    fn transform(&self, tag: &mut Tag, value: TagValue) -> Result<TagValue> {
        let located = match &value {
            TagValue::Text(text) => self.locate(text)?,
            _ => None,
        };

        let located = match located {
            Some(located) => located,
            None => return Ok(value),
        };

        tracing::debug!(tag = %tag.tag_name, expression = %located.expression, "extracted type expression");

        // kept on the tag even if parsing fails, for error reporting
        tag.type_expression = Some(located.expression.clone());

        let extraction = self.analyse(&tag.tag_name, located)?;
        Ok(TagValue::Text(merge(tag, extraction)))
    }
}
