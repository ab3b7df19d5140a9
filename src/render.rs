//! Notebook icon rendering
//!
//! Draws the extension's icon: a solid background, an inset white frame and
//! two ruled lines. Every measurement is derived from the icon size alone, so
//! the same size always produces the same pixels.

use crate::canvas::Canvas;
use crate::constants::{geometry, palette};
use crate::error::{IconError, Result};
use image::{Rgb, RgbImage};

/// Finished icon raster: 24-bit RGB, fully opaque
pub type IconImage = RgbImage;

/// A request to render one square icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest {
    size: u32,
}

impl RenderRequest {
    /// Create a request, rejecting zero-sized icons
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(IconError::InvalidSize(size));
        }
        Ok(RenderRequest { size })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn geometry(&self) -> IconGeometry {
        IconGeometry::for_size(self.size)
    }

    /// Draw the icon
    pub fn render(&self) -> IconImage {
        let size = self.size;
        let g = self.geometry();
        let background = Rgb(palette::BACKGROUND);
        let foreground = Rgb(palette::FOREGROUND);

        let mut canvas = Canvas::new(size, background);

        // Frame: far corner sits on `size - margin`, matching the inclusive box
        let far = size - g.margin;
        canvas.stroke_rect(g.margin, g.margin, far, far, g.line_width, foreground);

        // Ruled lines
        let x0 = g.margin * 2;
        if let Some(x1) = size.checked_sub(g.margin * 2) {
            for i in 1..=geometry::RULED_LINES {
                let y = g.margin + g.line_spacing * i;
                canvas.hline(x0, x1, y, g.line_width, foreground);
            }
        }

        canvas.into_image()
    }
}

/// Measurements derived from the icon size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    /// Inset between the canvas edge and the frame: floor(size * 0.2)
    pub margin: u32,
    /// Stroke width of the frame and lines: max(1, floor(size / 16))
    pub line_width: u32,
    /// Vertical distance between ruled lines: floor(size * 0.15)
    pub line_spacing: u32,
}

impl IconGeometry {
    pub fn for_size(size: u32) -> Self {
        IconGeometry {
            margin: scale(size, geometry::MARGIN_NUMERATOR, geometry::MARGIN_DENOMINATOR),
            line_width: (size / geometry::LINE_WIDTH_DIVISOR).max(geometry::MIN_LINE_WIDTH),
            line_spacing: scale(
                size,
                geometry::LINE_SPACING_NUMERATOR,
                geometry::LINE_SPACING_DENOMINATOR,
            ),
        }
    }
}

// Integer floor of size * num / den; widened so large sizes cannot overflow
fn scale(size: u32, num: u32, den: u32) -> u32 {
    (u64::from(size) * u64::from(num) / u64::from(den)) as u32
}

/// Render a `size`×`size` notebook icon
pub fn render(size: u32) -> Result<IconImage> {
    Ok(RenderRequest::new(size)?.render())
}
