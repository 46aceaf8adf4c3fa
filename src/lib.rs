//! tagtype - Type expressions in documentation-comment tags
//!
//! Pulls a leading `{type}` expression out of a tag's text, parses it into a
//! type tree, flattens the tree into printable type names and leaves the
//! rest of the text as the tag's description.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagTypeError;
