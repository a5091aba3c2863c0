//! Drawing seam between the animation core and the platform surface

use crate::anim::Rgb;

/// Primitive drawing surface with a current-pen-color model.
///
/// The engine's software framebuffer implements this for the real window;
/// tests substitute a recording double to assert emitted primitives.
/// Presentation and frame pacing live with the engine loop, not here.
pub trait Canvas {
    /// Fill the whole surface with the background color.
    fn clear(&mut self);

    /// Set the pen color used by subsequent primitives.
    fn set_color(&mut self, color: Rgb);

    /// Outline circle of radius `r` centered at (`x`, `y`).
    fn draw_circle(&mut self, x: i32, y: i32, r: i32);

    /// Line segment from (`x0`, `y0`) to (`x1`, `y1`), endpoints inclusive.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);

    /// HUD text with its top-left corner at (`x`, `y`). Rendered with the
    /// built-in uppercase bitmap font.
    fn draw_text(&mut self, x: i32, y: i32, text: &str);
}
