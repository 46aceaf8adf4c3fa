//! Recursive-descent parser for JSDoc type expressions
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! union   := unary ('|' unary)*
//! unary   := '...' unary | '?' unary | '!' unary | '?' | postfix
//! postfix := primary ('[]' | '.<' args '>' | '<' args '>')* ('?' | '!')? '='?
//! primary := '*' | '(' union ')' | record | function | 'null' | 'undefined' | name
//! ```
//!
//! Whitespace is allowed between any two tokens.

use super::{FieldType, ParseOptions, TypeKind, TypeNode};
use thiserror::Error;

/// A type expression the grammar rejects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at position {position}")]
pub struct TypeSyntaxError {
    /// Byte offset into the expression
    pub position: usize,
    pub message: String,
}

/// Namepath prefixes that may be followed by a colon inside a name
const NAMEPATH_PREFIXES: &[&str] = &["module", "event", "external"];

/// Deepest nesting of unions, prefixes and records accepted
const MAX_DEPTH: usize = 128;

pub(crate) struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a str, options: ParseOptions) -> Self {
        Self {
            src,
            pos: 0,
            depth: 0,
            options,
        }
    }

    /// Parse the whole input as a single type expression
    pub(crate) fn parse(mut self) -> Result<TypeNode, TypeSyntaxError> {
        self.skip_ws();
        if self.at_end() {
            return Err(self.error("empty type expression"));
        }

        let node = self.parse_union()?;

        self.skip_ws();
        match self.peek() {
            None => Ok(node),
            Some(c) => Err(self.error(format!("unexpected '{}'", c))),
        }
    }

    fn parse_union(&mut self) -> Result<TypeNode, TypeSyntaxError> {
        self.descend()?;
        let node = self.parse_union_members();
        self.depth -= 1;
        node
    }

    fn parse_union_members(&mut self) -> Result<TypeNode, TypeSyntaxError> {
        let first = self.parse_unary()?;
        let mut elements = vec![first];

        loop {
            self.skip_ws();
            if !self.eat('|') {
                break;
            }
            elements.push(self.parse_unary()?);
        }

        if elements.len() == 1 {
            Ok(elements.remove(0))
        } else {
            Ok(TypeNode::union(elements))
        }
    }

    fn parse_unary(&mut self) -> Result<TypeNode, TypeSyntaxError> {
        self.descend()?;
        let node = self.parse_prefixed();
        self.depth -= 1;
        node
    }

    fn parse_prefixed(&mut self) -> Result<TypeNode, TypeSyntaxError> {
        self.skip_ws();

        if self.eat_str("...") {
            let mut node = self.parse_unary()?;
            node.repeatable = true;
            return Ok(node);
        }

        match self.peek() {
            Some('?') => {
                self.bump();
                self.skip_ws();
                if self.at_type_end() {
                    let mut node = TypeNode::new(TypeKind::UnknownLiteral);
                    node.optional = self.eat('=');
                    return Ok(node);
                }
                let mut node = self.parse_unary()?;
                node.nullable = Some(true);
                Ok(node)
            }
            Some('!') => {
                self.bump();
                let mut node = self.parse_unary()?;
                node.nullable = Some(false);
                Ok(node)
            }
            _ => self.parse_postfix(),
        }
    }

    fn parse_postfix(&mut self) -> Result<TypeNode, TypeSyntaxError> {
        let mut node = self.parse_primary()?;

        loop {
            self.skip_ws();
            if self.options.jsdoc && self.eat_str("[]") {
                node = TypeNode::application(TypeNode::name("Array"), vec![node]);
            } else if self.eat_str(".<") {
                let applications = self.parse_applications()?;
                node = TypeNode::application(node, applications);
            } else if self.options.jsdoc && self.eat('<') {
                let applications = self.parse_applications()?;
                node = TypeNode::application(node, applications);
            } else {
                break;
            }
        }

        if self.eat('?') {
            node.nullable = Some(true);
        } else if self.eat('!') {
            node.nullable = Some(false);
        }

        self.skip_ws();
        if self.eat('=') {
            node.optional = true;
        }

        Ok(node)
    }

    /// Arguments of a type application, after the opening `<`
    fn parse_applications(&mut self) -> Result<Vec<TypeNode>, TypeSyntaxError> {
        let mut applications = vec![self.parse_union()?];

        loop {
            self.skip_ws();
            if self.eat(',') {
                applications.push(self.parse_union()?);
            } else {
                break;
            }
        }

        self.expect('>')?;
        Ok(applications)
    }

    fn parse_primary(&mut self) -> Result<TypeNode, TypeSyntaxError> {
        self.skip_ws();

        match self.peek() {
            None => Err(self.error("unexpected end of input")),
            Some('*') => {
                self.bump();
                Ok(TypeNode::new(TypeKind::AllLiteral))
            }
            Some('(') => {
                self.bump();
                let inner = self.parse_union()?;
                self.expect(')')?;
                Ok(inner)
            }
            Some('{') => {
                self.bump();
                self.parse_record()
            }
            Some(c) if self.is_name_start(c) => {
                let start = self.pos;
                let name = self.read_name()?;
                match name.as_str() {
                    "null" => Ok(TypeNode::new(TypeKind::NullLiteral)),
                    "undefined" => Ok(TypeNode::new(TypeKind::UndefinedLiteral)),
                    "function" if self.next_non_ws() == Some('(') => self.parse_function(),
                    "" => {
                        self.pos = start;
                        Err(self.error("expected a type name"))
                    }
                    _ => Ok(TypeNode::name(name)),
                }
            }
            Some(c) => Err(self.error(format!("unexpected '{}'", c))),
        }
    }

    /// `function(...)` after the `function` keyword
    fn parse_function(&mut self) -> Result<TypeNode, TypeSyntaxError> {
        self.skip_ws();
        self.expect('(')?;

        let mut params = Vec::new();
        let mut this = None;
        let mut new = None;

        self.skip_ws();
        if !self.eat(')') {
            loop {
                if self.eat_keyword_colon("this") {
                    this = Some(Box::new(self.parse_union()?));
                } else if self.eat_keyword_colon("new") {
                    new = Some(Box::new(self.parse_union()?));
                } else {
                    params.push(self.parse_union()?);
                }

                self.skip_ws();
                if !self.eat(',') {
                    break;
                }
            }
            self.expect(')')?;
        }

        self.skip_ws();
        let result = if self.eat(':') {
            Some(Box::new(self.parse_unary()?))
        } else {
            None
        };

        Ok(TypeNode::new(TypeKind::FunctionType {
            params,
            result,
            this,
            new,
        }))
    }

    /// `{key: T, key}` after the opening brace
    fn parse_record(&mut self) -> Result<TypeNode, TypeSyntaxError> {
        self.descend()?;
        let node = self.parse_fields();
        self.depth -= 1;
        node
    }

    fn parse_fields(&mut self) -> Result<TypeNode, TypeSyntaxError> {
        let mut fields = Vec::new();

        self.skip_ws();
        if !self.eat('}') {
            loop {
                self.skip_ws();
                let key = self.read_key()?;

                self.skip_ws();
                let value = if self.eat(':') {
                    Some(self.parse_union()?)
                } else {
                    None
                };
                fields.push(FieldType { key, value });

                self.skip_ws();
                if !self.eat(',') {
                    break;
                }
            }
            self.expect('}')?;
        }

        Ok(TypeNode::new(TypeKind::RecordType { fields }))
    }

    /// Enter one nesting level; the caller leaves it by decrementing `depth`
    fn descend(&mut self) -> Result<(), TypeSyntaxError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("type expression nested too deeply"));
        }
        self.depth += 1;
        Ok(())
    }

    fn read_name(&mut self) -> Result<String, TypeSyntaxError> {
        let start = self.pos;

        while let Some(c) = self.peek() {
            if c == '.' && self.rest().starts_with(".<") {
                break;
            }
            if (c == '"' || c == '\'') && self.options.jsdoc {
                self.read_quoted(c)?;
                continue;
            }
            if c == ':' {
                let so_far = &self.src[start..self.pos];
                if self.options.jsdoc && NAMEPATH_PREFIXES.contains(&so_far) {
                    self.bump();
                    continue;
                }
                break;
            }
            if !self.is_name_char(c) {
                break;
            }
            self.bump();
        }

        Ok(self.src[start..self.pos].to_string())
    }

    fn read_key(&mut self) -> Result<String, TypeSyntaxError> {
        let start = self.pos;

        match self.peek() {
            Some(q @ ('"' | '\'')) => {
                self.read_quoted(q)?;
            }
            _ => {
                while let Some(c) = self.peek() {
                    if c.is_alphanumeric() || c == '_' || c == '$' {
                        self.bump();
                    } else {
                        break;
                    }
                }
            }
        }

        if self.pos == start {
            return Err(self.error("expected a record field name"));
        }
        Ok(self.src[start..self.pos].to_string())
    }

    /// Consume a quoted segment, quotes included
    fn read_quoted(&mut self, quote: char) -> Result<(), TypeSyntaxError> {
        let start = self.pos;
        self.bump();

        while let Some(c) = self.bump() {
            if c == '\\' {
                self.bump();
            } else if c == quote {
                return Ok(());
            }
        }

        self.pos = start;
        Err(self.error("unterminated string"))
    }

    fn is_name_start(&self, c: char) -> bool {
        self.is_name_char(c) || (self.options.jsdoc && (c == '"' || c == '\''))
    }

    fn is_name_char(&self, c: char) -> bool {
        if c.is_alphanumeric() || c == '_' || c == '$' || c == '.' {
            return true;
        }
        self.options.jsdoc && matches!(c, '#' | '~' | '/' | '-')
    }

    /// Whether the next token ends a type rather than starting one
    fn at_type_end(&self) -> bool {
        match self.peek() {
            None => true,
            Some(c) => matches!(c, ',' | '|' | ')' | '>' | '}' | '=' | ']' | ':'),
        }
    }

    /// `keyword` followed by a colon, e.g. `this:`; restores on mismatch
    fn eat_keyword_colon(&mut self, keyword: &str) -> bool {
        let saved = self.pos;
        self.skip_ws();
        if self.eat_str(keyword) {
            self.skip_ws();
            if self.eat(':') {
                return true;
            }
        }
        self.pos = saved;
        false
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn next_non_ws(&self) -> Option<char> {
        self.rest().chars().find(|c| !c.is_whitespace())
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), TypeSyntaxError> {
        self.skip_ws();
        if self.eat(expected) {
            return Ok(());
        }
        match self.peek() {
            Some(c) => Err(self.error(format!("expected '{}', found '{}'", expected, c))),
            None => Err(self.error(format!("expected '{}', found end of input", expected))),
        }
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn error(&self, message: impl Into<String>) -> TypeSyntaxError {
        TypeSyntaxError {
            position: self.pos,
            message: message.into(),
        }
    }
}
