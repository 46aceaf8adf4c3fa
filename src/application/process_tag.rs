//! Run the standard transforms over a single tag

use super::{
    ExtractTypeTransform, TagTransform, TransformChain, UnknownTagTransform, WholeTagTransform,
};
use crate::domain::types::{JsDocGrammar, TypeGrammar};
use crate::domain::{Tag, TagDefinitions, TagValue};
use crate::error::Result;
use crate::infrastructure::{Config, UnterminatedPolicy};
use std::sync::Arc;

/// A tag after processing, together with its final value
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedTag {
    pub tag: Tag,
    pub value: TagValue,
}

/// Service applying validation and type extraction to tags.
///
/// The unknown-tag check runs first and yields no value, so it sits outside
/// the value chain. Unknown tags are still extracted; their warning is
/// recorded on the tag.
pub struct ProcessTagService {
    definitions: TagDefinitions,
    validate: UnknownTagTransform,
    describe: TransformChain,
    whole: TransformChain,
}

impl ProcessTagService {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_grammar(config, Arc::new(JsDocGrammar))
    }

    pub fn with_grammar(config: &Config, grammar: Arc<dyn TypeGrammar>) -> Result<Self> {
        Ok(Self::from_parts(
            config.tag_definitions(),
            grammar,
            config.unterminated_policy()?,
        ))
    }

    /// Build from an explicit registry and policy, bypassing config and environment
    pub fn from_parts(
        definitions: TagDefinitions,
        grammar: Arc<dyn TypeGrammar>,
        unterminated: UnterminatedPolicy,
    ) -> Self {
        let extract = ExtractTypeTransform::new(grammar).with_unterminated(unterminated);

        Self {
            definitions,
            validate: UnknownTagTransform,
            describe: TransformChain::new().with(extract.clone()),
            whole: TransformChain::new().with(extract).with(WholeTagTransform),
        }
    }

    /// Process a tag occurrence; the value becomes its description
    pub fn process(&self, tag_name: &str, value: &str) -> Result<ProcessedTag> {
        let mut tag = Tag::resolve(tag_name, &self.definitions);
        let value = self.run(&self.describe, &mut tag, value)?;
        Ok(ProcessedTag { tag, value })
    }

    /// Process a tag occurrence and use the whole tag as the final value
    pub fn process_whole(&self, tag_name: &str, value: &str) -> Result<ProcessedTag> {
        let mut tag = Tag::resolve(tag_name, &self.definitions);
        let value = self.run(&self.whole, &mut tag, value)?;
        Ok(ProcessedTag { tag, value })
    }

    fn run(&self, chain: &TransformChain, tag: &mut Tag, value: &str) -> Result<TagValue> {
        self.validate.transform(tag, TagValue::Absent)?;
        chain.apply(tag, TagValue::from(value))
    }
}
