//! Write a default configuration

use crate::error::{Result, TagTypeError};
use crate::infrastructure::config::{Config, CONFIG_FILE};
use std::path::{Path, PathBuf};

pub struct InitService;

impl InitService {
    /// Create `tagtype.toml` with default settings in `path`.
    ///
    /// Refuses to overwrite an existing file. Returns the written path.
    pub fn execute(path: &Path) -> Result<PathBuf> {
        let config_path = path.join(CONFIG_FILE);
        if config_path.exists() {
            return Err(TagTypeError::Config(format!(
                "{} already exists",
                config_path.display()
            )));
        }

        Config::default().save_to_dir(path)?;
        tracing::info!(path = %config_path.display(), "wrote default config");

        Ok(config_path)
    }
}
