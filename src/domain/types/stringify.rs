//! Canonical text form of type trees

use super::{FieldType, TypeKind, TypeNode};
use std::fmt;

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repeatable {
            f.write_str("...")?;
        }
        match self.nullable {
            Some(true) => f.write_str("?")?,
            Some(false) => f.write_str("!")?,
            None => {}
        }

        write!(f, "{}", self.kind)?;

        if self.optional {
            f.write_str("=")?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::AllLiteral => f.write_str("*"),
            TypeKind::NameExpression { name } => f.write_str(name),
            TypeKind::NullLiteral => f.write_str("null"),
            TypeKind::UndefinedLiteral => f.write_str("undefined"),
            TypeKind::UnknownLiteral => f.write_str("?"),
            TypeKind::TypeUnion { elements } => {
                f.write_str("(")?;
                write_joined(f, elements, "|")?;
                f.write_str(")")
            }
            TypeKind::TypeApplication {
                expression,
                applications,
            } => {
                write!(f, "{}.<", expression)?;
                write_joined(f, applications, ", ")?;
                f.write_str(">")
            }
            TypeKind::FunctionType {
                params,
                result,
                this,
                new,
            } => {
                let mut parts = Vec::with_capacity(params.len() + 2);
                if let Some(new) = new {
                    parts.push(format!("new:{}", new));
                }
                if let Some(this) = this {
                    parts.push(format!("this:{}", this));
                }
                parts.extend(params.iter().map(|p| p.to_string()));

                write!(f, "function({})", parts.join(", "))?;
                if let Some(result) = result {
                    write!(f, ": {}", result)?;
                }
                Ok(())
            }
            TypeKind::RecordType { fields } => {
                f.write_str("{")?;
                write_joined(f, fields, ", ")?;
                f.write_str("}")
            }
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}: {}", self.key, value),
            None => f.write_str(&self.key),
        }
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
