//! Infrastructure layer - Configuration files and tree interchange

pub mod config;
pub mod tree_json;

pub use config::{Config, UnterminatedPolicy};
pub use tree_json::{decode_type_tree, encode_type_tree};
