/// Hard-coded look of the notebook icon and where the generator writes it

pub mod palette {
    /// Background fill (#667eea)
    pub const BACKGROUND: [u8; 3] = [102, 126, 234];

    /// Frame and ruled lines
    pub const FOREGROUND: [u8; 3] = [255, 255, 255];
}

pub mod geometry {
    /// Frame inset as a fraction of the icon size: margin = size * 2 / 10
    pub const MARGIN_NUMERATOR: u32 = 2;
    pub const MARGIN_DENOMINATOR: u32 = 10;

    /// Distance between ruled lines: spacing = size * 15 / 100
    pub const LINE_SPACING_NUMERATOR: u32 = 15;
    pub const LINE_SPACING_DENOMINATOR: u32 = 100;

    /// Stroke width is size / 16, never thinner than one pixel
    pub const LINE_WIDTH_DIVISOR: u32 = 16;
    pub const MIN_LINE_WIDTH: u32 = 1;

    /// Number of ruled lines inside the frame
    pub const RULED_LINES: u32 = 2;
}

pub mod output {
    /// Icon sizes written by a default run, in order
    pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

    /// Directory the icons land in, relative to the working directory
    pub const DEFAULT_OUTPUT_DIR: &str = "icons";

    pub const FILE_PREFIX: &str = "icon";
    pub const FILE_EXTENSION: &str = "png";
}
