use crate::constants::output;
use crate::error::{IconError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// What the generator writes and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Icon sizes in pixels, rendered in this order
    pub sizes: Vec<u32>,
    /// Directory receiving `icon<size>.png` files
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            sizes: output::DEFAULT_SIZES.to_vec(),
            output_dir: PathBuf::from(output::DEFAULT_OUTPUT_DIR),
        }
    }
}

impl GeneratorConfig {
    /// Default sizes, written under `output_dir`
    pub fn with_output_dir(output_dir: impl AsRef<Path>) -> Self {
        GeneratorConfig {
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Path of the icon file for `size`
    pub fn icon_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(format!(
            "{}{}.{}",
            output::FILE_PREFIX,
            size,
            output::FILE_EXTENSION
        ))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(IconError::InvalidConfig("at least one icon size is required".to_string()));
        }

        if let Some(&size) = self.sizes.iter().find(|&&s| s == 0) {
            return Err(IconError::InvalidSize(size));
        }

        // Two entries for one size would write the same file twice
        let mut seen = HashSet::new();
        if let Some(dup) = self.sizes.iter().find(|&&s| !seen.insert(s)) {
            return Err(IconError::InvalidConfig(format!("icon size {} is listed twice", dup)));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(IconError::InvalidConfig("output directory cannot be empty".to_string()));
        }

        Ok(())
    }
}
