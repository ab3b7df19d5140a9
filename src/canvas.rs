use image::{Rgb, RgbImage};

/// Square drawing surface for a single icon.
///
/// Every primitive clips to the surface, so callers can pass coordinates that
/// run past the edge (the frame's far corner sits exactly on `size`).
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// Create a `size`×`size` canvas filled with `background`
    pub fn new(size: u32, background: Rgb<u8>) -> Self {
        Canvas {
            img: RgbImage::from_pixel(size, size, background),
        }
    }

    pub fn size(&self) -> u32 {
        self.img.width()
    }

    /// Fill the inclusive rectangle `(x0, y0)`–`(x1, y1)`
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
        if x0 > x1 || y0 > y1 {
            return;
        }
        let x_end = x1.min(self.img.width().saturating_sub(1));
        let y_end = y1.min(self.img.height().saturating_sub(1));
        if self.img.width() == 0 || x0 > x_end || y0 > y_end {
            return;
        }

        for py in y0..=y_end {
            for px in x0..=x_end {
                self.img.put_pixel(px, py, color);
            }
        }
    }

    /// Outline the inclusive rectangle `(x0, y0)`–`(x1, y1)`.
    ///
    /// The stroke grows inward: ring `i` outlines the rectangle shrunk by `i`
    /// on every side.
    pub fn stroke_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, width: u32, color: Rgb<u8>) {
        for i in 0..width {
            let (left, top) = (x0 + i, y0 + i);
            let (Some(right), Some(bottom)) = (x1.checked_sub(i), y1.checked_sub(i)) else {
                break;
            };
            if left > right || top > bottom {
                break;
            }

            self.fill_rect(left, top, right, top, color);
            self.fill_rect(left, bottom, right, bottom, color);
            self.fill_rect(left, top, left, bottom, color);
            self.fill_rect(right, top, right, bottom, color);
        }
    }

    /// Draw a horizontal line through row `y` from column `x0` to `x1` inclusive.
    ///
    /// A line of width `w` covers rows `y - (w - 1) / 2` through `y + w / 2`,
    /// so even widths sit one row lower than they extend upward.
    pub fn hline(&mut self, x0: u32, x1: u32, y: u32, width: u32, color: Rgb<u8>) {
        if width == 0 {
            return;
        }
        let top = y.saturating_sub((width - 1) / 2);
        let bottom = y.saturating_add(width / 2);
        self.fill_rect(x0, top, x1, bottom, color);
    }

    /// Finish drawing and hand back the raster
    pub fn into_image(self) -> RgbImage {
        self.img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb<u8> = Rgb([0, 0, 0]);
    const FG: Rgb<u8> = Rgb([255, 255, 255]);

    fn lit(canvas: &Canvas) -> Vec<(u32, u32)> {
        canvas
            .img
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == FG)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_new_fills_background() {
        let canvas = Canvas::new(4, Rgb([1, 2, 3]));
        assert_eq!(canvas.size(), 4);
        assert!(canvas.img.pixels().all(|p| *p == Rgb([1, 2, 3])));
    }

    #[test]
    fn test_fill_rect_is_inclusive() {
        let mut canvas = Canvas::new(5, BG);
        canvas.fill_rect(1, 1, 2, 3, FG);
        assert_eq!(lit(&canvas).len(), 2 * 3);
        assert_eq!(*canvas.img.get_pixel(2, 3), FG);
        assert_eq!(*canvas.img.get_pixel(3, 3), BG);
    }

    #[test]
    fn test_fill_rect_clips_to_canvas() {
        let mut canvas = Canvas::new(4, BG);
        canvas.fill_rect(2, 2, 100, 100, FG);
        assert_eq!(lit(&canvas), vec![(2, 2), (3, 2), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_fill_rect_ignores_inverted_and_offscreen() {
        let mut canvas = Canvas::new(4, BG);
        canvas.fill_rect(3, 0, 1, 0, FG);
        canvas.fill_rect(10, 10, 12, 12, FG);
        assert!(lit(&canvas).is_empty());
    }

    #[test]
    fn test_stroke_rect_single_pixel_ring() {
        let mut canvas = Canvas::new(6, BG);
        canvas.stroke_rect(1, 1, 4, 4, 1, FG);

        // 4x4 ring has 12 edge pixels and an untouched 2x2 interior
        assert_eq!(lit(&canvas).len(), 12);
        assert_eq!(*canvas.img.get_pixel(2, 2), BG);
        assert_eq!(*canvas.img.get_pixel(0, 0), BG);
    }

    #[test]
    fn test_stroke_rect_grows_inward() {
        let mut canvas = Canvas::new(8, BG);
        canvas.stroke_rect(0, 0, 7, 7, 2, FG);

        assert_eq!(*canvas.img.get_pixel(1, 1), FG);
        assert_eq!(*canvas.img.get_pixel(6, 4), FG);
        assert_eq!(*canvas.img.get_pixel(2, 2), BG);
        assert_eq!(lit(&canvas).len(), 64 - 16);
    }

    #[test]
    fn test_stroke_rect_wider_than_rect_fills_it() {
        let mut canvas = Canvas::new(4, BG);
        canvas.stroke_rect(0, 0, 3, 3, 10, FG);
        assert_eq!(lit(&canvas).len(), 16);
    }

    #[test]
    fn test_hline_odd_width_is_centred() {
        let mut canvas = Canvas::new(10, BG);
        canvas.hline(2, 4, 5, 3, FG);
        let rows: Vec<u32> = lit(&canvas).iter().map(|&(_, y)| y).collect();
        assert_eq!(rows.iter().min(), Some(&4));
        assert_eq!(rows.iter().max(), Some(&6));
        assert_eq!(rows.len(), 3 * 3);
    }

    #[test]
    fn test_hline_even_width_biased_down() {
        let mut canvas = Canvas::new(10, BG);
        canvas.hline(0, 0, 5, 4, FG);
        assert_eq!(lit(&canvas), vec![(0, 4), (0, 5), (0, 6), (0, 7)]);
    }

    #[test]
    fn test_hline_near_top_edge_clips() {
        let mut canvas = Canvas::new(4, BG);
        canvas.hline(0, 1, 0, 3, FG);
        assert_eq!(lit(&canvas), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
