//! Error types for tagtype

use thiserror::Error;

/// Main error type for tag type extraction
#[derive(Debug, Error)]
pub enum TagTypeError {
    #[error("Unterminated type expression: {0}")]
    UnterminatedTypeExpression(String),

    #[error("Error parsing the jsdoc type expression \"{{{expression}}}\" in @{tag_name}: {message}")]
    TypeExpressionParse {
        expression: String,
        tag_name: String,
        message: String,
    },

    #[error("unrecognized type {kind} in parsed type: {node}")]
    UnrecognizedTypeKind { kind: String, node: String },

    #[error("Invalid type tree: {0}")]
    InvalidTypeTree(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TagTypeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagTypeError::UnterminatedTypeExpression(_) => 2,
            TagTypeError::TypeExpressionParse { .. } => 3,
            TagTypeError::UnrecognizedTypeKind { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagTypeError::UnterminatedTypeExpression(value) => {
                format!(
                    "Unterminated type expression in: '{}'\n\n\
                    Suggestions:\n\
                    • Close the type expression with a matching '}}'\n\
                    • Escape literal braces inside the type as '\\{{' and '\\}}'\n\
                    • Set unterminated = \"consume-rest\" in tagtype.toml to accept it",
                    value
                )
            }
            TagTypeError::TypeExpressionParse { .. } => {
                format!(
                    "{}\n\n\
                    Examples of valid type expressions:\n\
                    {{string}}, {{(string|number)}}, {{Array.<string>}}\n\
                    {{Object.<string, number>}}, {{function(string): boolean}}\n\
                    {{?number}}, {{!Object}}, {{...*}}, {{string=}}",
                    self
                )
            }
            TagTypeError::UnrecognizedTypeKind { kind, .. } => {
                format!(
                    "{}\n\n\
                    Known kinds: AllLiteral, FunctionType, NameExpression, NullLiteral,\n\
                    RecordType, TypeApplication, TypeUnion, UndefinedLiteral, UnknownLiteral\n\
                    The tree was produced by a grammar that emits '{}'; check its version.",
                    self, kind
                )
            }
            TagTypeError::Config(msg) => {
                if msg.contains("unterminated") {
                    format!(
                        "{}\n\n\
                        Valid policies: error, consume-rest\n\
                        Example: unterminated = \"error\"",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagTypeError
pub type Result<T> = std::result::Result<T, TagTypeError>;
