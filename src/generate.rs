use crate::config::GeneratorConfig;
use crate::error::{IconError, Result};
use crate::render::RenderRequest;
use image::ImageFormat;
use std::fs;
use std::path::{self, Path, PathBuf};

/// One icon written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// Outcome of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    /// True when the output directory did not exist before this run
    pub created_output_dir: bool,
    /// Icons in the order they were written
    pub icons: Vec<WrittenIcon>,
}

impl GenerationReport {
    /// Absolute form of the output directory, or the directory as given when
    /// it cannot be resolved. Does not touch the filesystem.
    pub fn resolved_output_dir(&self) -> PathBuf {
        path::absolute(&self.output_dir).unwrap_or_else(|_| self.output_dir.clone())
    }

    /// Status lines for the run, ending with where the icons were saved
    pub fn summary_lines(&self, abs_dir: &Path) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.icons.len() + 4);

        if self.created_output_dir {
            lines.push(format!("Created directory: {}", self.output_dir.display()));
        }

        for icon in &self.icons {
            lines.push(format!(
                "Generated icon: {} ({}x{})",
                icon.path.display(),
                icon.size,
                icon.size
            ));
        }

        lines.push(String::new());
        lines.push("✅ Icon generation complete!".to_string());
        lines.push(format!("Icons saved to: {}", abs_dir.display()));

        lines
    }
}

/// Render every configured size and save it as PNG.
///
/// Existing files at the target paths are overwritten. The run stops at the
/// first failure; icons written before it stay on disk.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    config.validate()?;

    let created_output_dir = ensure_output_dir(config)?;

    let mut icons = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let img = RenderRequest::new(size)?.render();
        let path = config.icon_path(size);

        img.save_with_format(&path, ImageFormat::Png)
            .map_err(|source| IconError::Encode { path: path.clone(), source })?;

        icons.push(WrittenIcon { size, path });
    }

    Ok(GenerationReport {
        output_dir: config.output_dir.clone(),
        created_output_dir,
        icons,
    })
}

// Returns whether the directory had to be created
fn ensure_output_dir(config: &GeneratorConfig) -> Result<bool> {
    let dir = &config.output_dir;
    if dir.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(dir).map_err(|source| IconError::Filesystem {
        path: dir.clone(),
        source,
    })?;
    Ok(true)
}
