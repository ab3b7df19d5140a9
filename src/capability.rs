use crate::error::{IconError, Result};
use image::ImageFormat;

/// Check that the linked imaging backend can encode PNG.
///
/// `image` compiles its codecs behind cargo features, so a build with default
/// features turned off can lack the encoder entirely. Run this before touching
/// the filesystem.
pub fn probe_png_support() -> Result<()> {
    probe_format(ImageFormat::Png)
}

fn probe_format(format: ImageFormat) -> Result<()> {
    if format.writing_enabled() {
        Ok(())
    } else {
        Err(IconError::MissingDependency {
            capability: "PNG encoding",
            hint: "enable the `png` feature of the `image` crate and rebuild",
        })
    }
}
