//! Domain layer - Tags, type trees and the type-expression scanner

pub mod scanner;
pub mod tag;
pub mod types;

pub use tag::{Tag, TagDef, TagDefinitions, TagValue};
pub use types::{TypeKind, TypeNode};
