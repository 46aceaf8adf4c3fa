//! Application layer - Tag transforms and their orchestration

pub mod extract_type;
pub mod init;
pub mod process_tag;
pub mod unknown_tag;
pub mod whole_tag;

pub use extract_type::ExtractTypeTransform;
pub use init::InitService;
pub use process_tag::ProcessTagService;
pub use unknown_tag::UnknownTagTransform;
pub use whole_tag::WholeTagTransform;

use crate::domain::{Tag, TagValue};
use crate::error::Result;

/// A per-tag transform.
///
/// Receives the tag (mutable, so results can be recorded on it) and the
/// current value, and returns the tag's new value.
pub trait TagTransform: Send + Sync {
    fn name(&self) -> &'static str;

    fn transform(&self, tag: &mut Tag, value: TagValue) -> Result<TagValue>;
}

/// Transforms applied to a tag in order, each receiving the previous value
#[derive(Default)]
pub struct TransformChain {
    transforms: Vec<Box<dyn TagTransform>>,
}

impl TransformChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, transform: impl TagTransform + 'static) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Run every transform over the tag; the first failure aborts the chain
    pub fn apply(&self, tag: &mut Tag, value: TagValue) -> Result<TagValue> {
        let mut value = value;
        for transform in &self.transforms {
            tracing::trace!(transform = transform.name(), tag = %tag.tag_name, "applying");
            value = transform.transform(tag, value)?;
        }
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}
