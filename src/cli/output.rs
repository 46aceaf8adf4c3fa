//! Output formatting utilities

use crate::domain::{Tag, TagValue};

/// Format a processed tag and the value its transforms returned, one field per line
pub fn format_tag_report(tag: &Tag, value: &TagValue) -> String {
    let mut output = format!("@{}\n", tag.tag_name);

    if let Some(expression) = &tag.type_expression {
        output.push_str(&format!("  typeExpression: {}\n", expression));
    }
    if let Some(tree) = &tag.type_tree {
        output.push_str(&format!("  type: {}\n", tree));
    }
    if let Some(types) = &tag.type_list {
        output.push_str(&format!("  typeList: {}\n", types.join(", ")));
    }
    if tag.optional {
        output.push_str("  optional: true\n");
    }
    if let Some(description) = &tag.description {
        output.push_str(&format!("  description: {}\n", description));
    }
    if let Some(text) = value.as_text() {
        output.push_str(&format!("  value: {}\n", text));
    }
    for error in &tag.errors {
        output.push_str(&format!("  error: {}\n", error));
    }

    output
}

/// Format a flattened type list, one type per line
pub fn format_type_list(types: &[String]) -> String {
    let mut output = String::new();
    for name in types {
        output.push_str(name);
        output.push('\n');
    }
    output
}
