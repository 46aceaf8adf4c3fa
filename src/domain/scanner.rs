//! Locating a leading brace-delimited type expression in tag text

use regex::Regex;
use std::sync::OnceLock;

/// Optional whitespace, an opening brace, then anything but `@` (inline tags
/// such as `{@link Foo}` are not type expressions)
fn type_expression_start() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\s*(\{)[^@]").unwrap())
}

/// Result of scanning a value for a type expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The value does not start with a type expression
    NotFound,
    /// A complete `{...}` expression
    Found(TypeSpan),
    /// An opening brace whose match was never found
    Unterminated { open: usize },
}

/// Byte positions of a matched type expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpan {
    /// Index of the opening `{`
    pub open: usize,
    /// Index of the matching `}`
    pub close: usize,
}

impl TypeSpan {
    /// Text strictly between the braces, without unescaping
    pub fn raw<'a>(&self, value: &'a str) -> &'a str {
        &value[self.open + 1..self.close]
    }

    /// Trimmed expression text with escaped braces resolved
    pub fn expression(&self, value: &str) -> String {
        unescape_braces(self.raw(value).trim())
    }

    /// The value with the `{...}` span removed, trimmed
    pub fn remainder(&self, value: &str) -> String {
        let mut rest = String::with_capacity(value.len());
        rest.push_str(&value[..self.open]);
        rest.push_str(&value[self.close + 1..]);
        rest.trim().to_string()
    }
}

/// Scan `value` for a leading type expression, honoring nested braces and
/// backslash escapes.
pub fn scan(value: &str) -> ScanOutcome {
    let open = match type_expression_start().captures(value) {
        Some(caps) => match caps.get(1) {
            Some(brace) => brace.start(),
            None => return ScanOutcome::NotFound,
        },
        None => return ScanOutcome::NotFound,
    };

    let mut count = 1usize;
    let mut chars = value[open + 1..].char_indices();

    while let Some((offset, c)) = chars.next() {
        match c {
            '\\' => {
                // escape: skip the next character whatever it is
                chars.next();
            }
            '{' => count += 1,
            '}' => {
                count -= 1;
                if count == 0 {
                    return ScanOutcome::Found(TypeSpan {
                        open,
                        close: open + 1 + offset,
                    });
                }
            }
            _ => {}
        }
    }

    ScanOutcome::Unterminated { open }
}

/// Resolve `\{` and `\}` to literal braces
pub fn unescape_braces(text: &str) -> String {
    text.replace("\\}", "}").replace("\\{", "{")
}
