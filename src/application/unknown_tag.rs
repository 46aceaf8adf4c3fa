//! Flagging tags that have no definition

use super::TagTransform;
use crate::domain::{Tag, TagValue};
use crate::error::Result;

/// Message recorded for a tag with no definition
pub fn unknown_tag_message(tag_name: &str) -> String {
    format!("Unknown tag: {}", tag_name)
}

/// Records an error on tags whose name is not recognized. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownTagTransform;

impl TagTransform for UnknownTagTransform {
    fn name(&self) -> &'static str {
        "unknown-tag"
    }

    fn transform(&self, tag: &mut Tag, _value: TagValue) -> Result<TagValue> {
        if tag.tag_def.is_none() {
            tracing::warn!(tag = %tag.tag_name, "unknown tag");
            tag.push_error(unknown_tag_message(&tag.tag_name));
        }
        Ok(TagValue::Absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagDef;
    use std::sync::Arc;

    #[test]
    fn test_unknown_tag_gets_one_error_per_run() {
        let mut tag = Tag::new("bogus", None);

        UnknownTagTransform
            .transform(&mut tag, TagValue::from("x"))
            .unwrap();
        assert_eq!(tag.errors, vec!["Unknown tag: bogus"]);

        UnknownTagTransform
            .transform(&mut tag, TagValue::from("x"))
            .unwrap();
        assert_eq!(tag.errors, vec!["Unknown tag: bogus", "Unknown tag: bogus"]);
    }

    #[test]
    fn test_known_tag_gets_no_error() {
        let mut tag = Tag::new("param", Some(Arc::new(TagDef::new("param"))));
        let value = UnknownTagTransform
            .transform(&mut tag, TagValue::from("x"))
            .unwrap();
        assert!(tag.errors.is_empty());
        assert_eq!(value, TagValue::Absent);
    }

    #[test]
    fn test_existing_errors_are_kept() {
        let mut tag = Tag::new("bogus", None);
        tag.push_error("earlier problem");

        UnknownTagTransform
            .transform(&mut tag, TagValue::Absent)
            .unwrap();
        assert_eq!(tag.errors, vec!["earlier problem", "Unknown tag: bogus"]);
    }
}
