//! Parsed type-expression trees
//!
//! A [`TypeNode`] is the structured form of a type expression such as
//! `Array.<string>` or `(number|undefined)=`. The set of node kinds is
//! closed: every consumer matches on [`TypeKind`] exhaustively.

pub mod flatten;
pub mod grammar;
pub mod parser;
pub mod stringify;

pub use flatten::flatten;
pub use grammar::{JsDocGrammar, ParseOptions, TypeGrammar};
pub use parser::TypeSyntaxError;

/// A node in a parsed type-expression tree, with its modifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNode {
    pub kind: TypeKind,
    /// Trailing `=`
    pub optional: bool,
    /// `Some(true)` for `?T`, `Some(false)` for `!T`
    pub nullable: Option<bool>,
    /// Leading `...`
    pub repeatable: bool,
}

/// The kinds of node a type-expression tree can hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// `*`
    AllLiteral,
    /// `function(this:T, new:U, A, B): R`
    FunctionType {
        params: Vec<TypeNode>,
        result: Option<Box<TypeNode>>,
        this: Option<Box<TypeNode>>,
        new: Option<Box<TypeNode>>,
    },
    /// A plain type name such as `string` or `module:foo/bar~Baz`
    NameExpression { name: String },
    /// `null`
    NullLiteral,
    /// `{a: number, b}`
    RecordType { fields: Vec<FieldType> },
    /// `Array.<string>`, `Object.<K, V>`
    TypeApplication {
        expression: Box<TypeNode>,
        applications: Vec<TypeNode>,
    },
    /// `(A|B|C)`
    TypeUnion { elements: Vec<TypeNode> },
    /// `undefined`
    UndefinedLiteral,
    /// `?`
    UnknownLiteral,
}

/// A single field of a record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    pub key: String,
    pub value: Option<TypeNode>,
}

impl TypeNode {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            optional: false,
            nullable: None,
            repeatable: false,
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::new(TypeKind::NameExpression { name: name.into() })
    }

    pub fn union(elements: Vec<TypeNode>) -> Self {
        Self::new(TypeKind::TypeUnion { elements })
    }

    pub fn application(expression: TypeNode, applications: Vec<TypeNode>) -> Self {
        Self::new(TypeKind::TypeApplication {
            expression: Box::new(expression),
            applications,
        })
    }

    pub fn with_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn with_repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// Kind name as used in the catharsis JSON shape
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}

impl TypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            TypeKind::AllLiteral => "AllLiteral",
            TypeKind::FunctionType { .. } => "FunctionType",
            TypeKind::NameExpression { .. } => "NameExpression",
            TypeKind::NullLiteral => "NullLiteral",
            TypeKind::RecordType { .. } => "RecordType",
            TypeKind::TypeApplication { .. } => "TypeApplication",
            TypeKind::TypeUnion { .. } => "TypeUnion",
            TypeKind::UndefinedLiteral => "UndefinedLiteral",
            TypeKind::UnknownLiteral => "UnknownLiteral",
        }
    }
}
