//! Software rasterizer over an RGBA8 framebuffer

use crate::anim::Rgb;
use crate::render::canvas::Canvas;
use crate::render::font;

/// CPU framebuffer implementing the [`Canvas`] drawing seam.
///
/// Pixels are stored as tightly packed RGBA8 rows, matching the frame layout
/// the presentation surface expects, so presenting is a single copy. All
/// primitives clip at the edges; drawing off-surface is a no-op, never a
/// panic.
pub struct SoftCanvas {
    width: i32,
    height: i32,
    pen: Rgb,
    data: Vec<u8>,
}

impl SoftCanvas {
    /// A black canvas of the given pixel dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let mut canvas = Self {
            width: width as i32,
            height: height as i32,
            pen: Rgb::BLACK,
            data: vec![0; (width * height * 4) as usize],
        };
        canvas.clear();
        canvas
    }

    /// The raw RGBA8 framebuffer, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Color of the pixel at (`x`, `y`), or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        Some(Rgb::new(
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ))
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        self.data[offset] = self.pen.r;
        self.data[offset + 1] = self.pen.g;
        self.data[offset + 2] = self.pen.b;
        self.data[offset + 3] = 0xff;
    }

    fn circle_octants(&mut self, cx: i32, cy: i32, x: i32, y: i32) {
        self.set_pixel(cx + x, cy + y);
        self.set_pixel(cx - x, cy + y);
        self.set_pixel(cx + x, cy - y);
        self.set_pixel(cx - x, cy - y);
        self.set_pixel(cx + y, cy + x);
        self.set_pixel(cx - y, cy + x);
        self.set_pixel(cx + y, cy - x);
        self.set_pixel(cx - y, cy - x);
    }
}

impl Canvas for SoftCanvas {
    fn clear(&mut self) {
        for pixel in self.data.chunks_exact_mut(4) {
            pixel[0] = 0;
            pixel[1] = 0;
            pixel[2] = 0;
            pixel[3] = 0xff;
        }
    }

    fn set_color(&mut self, color: Rgb) {
        self.pen = color;
    }

    /// Midpoint circle outline.
    fn draw_circle(&mut self, cx: i32, cy: i32, r: i32) {
        if r < 0 {
            return;
        }
        if r == 0 {
            self.set_pixel(cx, cy);
            return;
        }
        let mut x = r;
        let mut y = 0;
        let mut err = 1 - r;
        while x >= y {
            self.circle_octants(cx, cy, x, y);
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Bresenham line, endpoints inclusive.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let (mut x, mut y) = (x0, y0);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        let mut pen_x = x;
        for c in text.chars() {
            if let Some(columns) = font::glyph(c.to_ascii_uppercase()) {
                for (col, bits) in columns.iter().enumerate() {
                    for row in 0..font::HEIGHT {
                        if bits >> row & 1 == 1 {
                            self.set_pixel(pen_x + col as i32, y + row);
                        }
                    }
                }
            }
            pen_x += font::ADVANCE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_paints_every_pixel_black() {
        let mut canvas = SoftCanvas::new(4, 4);
        canvas.set_color(Rgb::RED);
        canvas.draw_line(0, 0, 3, 3);
        canvas.clear();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(canvas.pixel(x, y), Some(Rgb::BLACK));
            }
        }
    }

    #[test]
    fn line_covers_both_endpoints() {
        let mut canvas = SoftCanvas::new(16, 16);
        canvas.set_color(Rgb::GREEN);
        canvas.draw_line(2, 3, 10, 7);
        assert_eq!(canvas.pixel(2, 3), Some(Rgb::GREEN));
        assert_eq!(canvas.pixel(10, 7), Some(Rgb::GREEN));
    }

    #[test]
    fn drawing_off_surface_is_clipped_not_fatal() {
        let mut canvas = SoftCanvas::new(8, 8);
        canvas.set_color(Rgb::RED);
        canvas.draw_line(-20, -20, 30, 30);
        canvas.draw_circle(0, 0, 12);
        canvas.draw_circle(-5, -5, 3);
        assert_eq!(canvas.pixel(0, 0), Some(Rgb::RED));
    }

    #[test]
    fn circle_touches_its_cardinal_extremes() {
        let mut canvas = SoftCanvas::new(32, 32);
        canvas.set_color(Rgb::RED);
        canvas.draw_circle(16, 16, 5);
        assert_eq!(canvas.pixel(21, 16), Some(Rgb::RED));
        assert_eq!(canvas.pixel(11, 16), Some(Rgb::RED));
        assert_eq!(canvas.pixel(16, 21), Some(Rgb::RED));
        assert_eq!(canvas.pixel(16, 11), Some(Rgb::RED));
        // Interior stays unfilled
        assert_eq!(canvas.pixel(16, 16), Some(Rgb::BLACK));
    }

    #[test]
    fn text_marks_pixels_and_uppercases() {
        let mut canvas = SoftCanvas::new(64, 16);
        canvas.set_color(Rgb::GREEN);
        canvas.draw_text(1, 1, "q");

        let mut lit = 0;
        for y in 0..16 {
            for x in 0..64 {
                if canvas.pixel(x, y) == Some(Rgb::GREEN) {
                    lit += 1;
                }
            }
        }
        assert!(lit > 0, "lowercase q should render via the uppercase glyph");
    }

    #[test]
    fn pen_color_applies_to_subsequent_primitives_only() {
        let mut canvas = SoftCanvas::new(8, 8);
        canvas.set_color(Rgb::RED);
        canvas.draw_line(0, 0, 0, 0);
        canvas.set_color(Rgb::GREEN);
        canvas.draw_line(1, 0, 1, 0);
        assert_eq!(canvas.pixel(0, 0), Some(Rgb::RED));
        assert_eq!(canvas.pixel(1, 0), Some(Rgb::GREEN));
    }
}
