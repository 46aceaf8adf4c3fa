//! The grammar seam: parsing and canonical stringification

use super::parser::{Parser, TypeSyntaxError};
use super::TypeNode;

/// Dialect switches for the type-expression parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept JSDoc extensions: `T[]`, `Array<T>` without the dot, and
    /// namepath characters (`#`, `~`, `/`, `-`, quoted segments) in names
    pub jsdoc: bool,
}

impl ParseOptions {
    pub fn jsdoc() -> Self {
        Self { jsdoc: true }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::jsdoc()
    }
}

/// Parses type expressions into trees and turns trees back into text
pub trait TypeGrammar: Send + Sync {
    fn parse(&self, expression: &str, options: &ParseOptions)
        -> Result<TypeNode, TypeSyntaxError>;

    /// Canonical text for a node, modifiers included
    fn stringify(&self, node: &TypeNode) -> String;
}

/// The built-in grammar for JSDoc type expressions
#[derive(Debug, Clone, Copy, Default)]
pub struct JsDocGrammar;

impl TypeGrammar for JsDocGrammar {
    fn parse(
        &self,
        expression: &str,
        options: &ParseOptions,
    ) -> Result<TypeNode, TypeSyntaxError> {
        Parser::new(expression, *options).parse()
    }

    fn stringify(&self, node: &TypeNode) -> String {
        node.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_then_stringify_is_canonical() {
        let grammar = JsDocGrammar;
        let node = grammar
            .parse("Object< string ,number >", &ParseOptions::jsdoc())
            .unwrap();
        assert_eq!(grammar.stringify(&node), "Object.<string, number>");
    }

    #[test]
    fn test_default_options_are_jsdoc() {
        assert!(ParseOptions::default().jsdoc);
    }
}
