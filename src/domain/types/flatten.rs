//! Reducing a type tree to a flat list of printable type names

use super::{TypeGrammar, TypeKind, TypeNode};

/// Flatten a type tree into printable type names, in tree order.
///
/// Unions contribute their members recursively; composite kinds (functions,
/// records, applications) are rendered whole by the grammar's stringifier.
/// Duplicates are kept.
pub fn flatten(node: &TypeNode, grammar: &dyn TypeGrammar) -> Vec<String> {
    let mut types = Vec::new();
    flatten_into(node, grammar, &mut types);
    types
}

fn flatten_into(node: &TypeNode, grammar: &dyn TypeGrammar, types: &mut Vec<String>) {
    match &node.kind {
        TypeKind::AllLiteral => types.push("*".to_string()),
        TypeKind::FunctionType { .. } => types.push(grammar.stringify(node)),
        TypeKind::NameExpression { name } => types.push(name.clone()),
        TypeKind::NullLiteral => types.push("null".to_string()),
        TypeKind::RecordType { .. } => types.push(grammar.stringify(node)),
        TypeKind::TypeApplication { .. } => types.push(grammar.stringify(node)),
        TypeKind::TypeUnion { elements } => {
            for element in elements {
                flatten_into(element, grammar, types);
            }
        }
        TypeKind::UndefinedLiteral => types.push("undefined".to_string()),
        TypeKind::UnknownLiteral => types.push("?".to_string()),
    }
}
