//! Using the whole tag as its value

use super::TagTransform;
use crate::domain::{Tag, TagValue};
use crate::error::Result;

/// Replaces the value with the entire tag record, for consumers that need
/// more than a single field
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeTagTransform;

impl TagTransform for WholeTagTransform {
    fn name(&self) -> &'static str {
        "whole-tag"
    }

    fn transform(&self, tag: &mut Tag, _value: TagValue) -> Result<TagValue> {
        Ok(TagValue::Tag(Box::new(tag.clone())))
    }
}
