//! Configuration management

use crate::domain::{TagDef, TagDefinitions};
use crate::error::{Result, TagTypeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILE: &str = "tagtype.toml";

/// What to do with a `{` whose matching `}` never arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UnterminatedPolicy {
    /// Fail the tag with an unterminated-expression error
    #[default]
    Error,
    /// Treat the rest of the value as the type expression
    ConsumeRest,
}

impl FromStr for UnterminatedPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(UnterminatedPolicy::Error),
            "consume-rest" => Ok(UnterminatedPolicy::ConsumeRest),
            _ => Err(format!("Invalid unterminated policy: {}", s)),
        }
    }
}

impl fmt::Display for UnterminatedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnterminatedPolicy::Error => f.write_str("error"),
            UnterminatedPolicy::ConsumeRest => f.write_str("consume-rest"),
        }
    }
}

/// A recognized tag, optionally with alternative names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownTag {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl KnownTag {
    fn new(name: &str, aliases: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub unterminated: UnterminatedPolicy,

    #[serde(default = "default_known_tags", rename = "tag")]
    pub known_tags: Vec<KnownTag>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            unterminated: UnterminatedPolicy::default(),
            known_tags: default_known_tags(),
        }
    }
}

fn default_known_tags() -> Vec<KnownTag> {
    vec![
        KnownTag::new("param", &["arg", "argument"]),
        KnownTag::new("returns", &["return"]),
        KnownTag::new("type", &[]),
        KnownTag::new("typedef", &[]),
        KnownTag::new("property", &["prop"]),
        KnownTag::new("throws", &["exception"]),
        KnownTag::new("description", &["desc"]),
        KnownTag::new("name", &[]),
        KnownTag::new("module", &[]),
        KnownTag::new("see", &[]),
        KnownTag::new("example", &[]),
        KnownTag::new("deprecated", &[]),
        KnownTag::new("private", &[]),
        KnownTag::new("kind", &[]),
    ]
}

impl Config {
    /// Load config from tagtype.toml in the given directory, falling back to
    /// defaults when the file does not exist
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Self::load_from_file(&config_path)
    }

    /// Load config from an explicit file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            TagTypeError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config to tagtype.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TagTypeError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Get the unterminated policy, checking TAGTYPE_UNTERMINATED first
    pub fn unterminated_policy(&self) -> Result<UnterminatedPolicy> {
        match std::env::var("TAGTYPE_UNTERMINATED") {
            Ok(value) => UnterminatedPolicy::from_str(&value).map_err(TagTypeError::Config),
            Err(_) => Ok(self.unterminated),
        }
    }

    /// Build the tag definition registry from the known tags
    pub fn tag_definitions(&self) -> TagDefinitions {
        let mut defs = TagDefinitions::new();
        for known in &self.known_tags {
            let aliases: Vec<&str> = known.aliases.iter().map(String::as_str).collect();
            defs.register(TagDef::new(known.name.as_str()).with_aliases(&aliases));
        }
        defs
    }
}
