//! Rendering: the drawing seam, the software rasterizer, and the
//! geometry-to-primitive translation.

mod canvas;
mod font;
mod scene;
mod soft;

pub use canvas::Canvas;
pub use scene::{draw_frame, draw_shape, draw_spiral, spiral_points, HINT_TEXT};
pub use soft::SoftCanvas;
