//! Geometry-to-primitive translation for shapes, the spiral overlay, and
//! the HUD.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::anim::{AnimationState, Rgb, Shape, ShapeKind, SpiralEffect};
use crate::render::canvas::Canvas;

/// Dots drawn per spiral pass
const SPIRAL_POINTS: usize = 50;
/// Distance of the outermost dot from the spiral origin
const SPIRAL_MAX_RADIUS: f32 = 100.0;
/// Phase offset between consecutive dots
const SPIRAL_PHASE_STEP: f32 = 0.1;
/// Radius of each spiral dot
const SPIRAL_DOT_RADIUS: i32 = 2;
/// The spiral draws red
const SPIRAL_COLOR: Rgb = Rgb::RED;
/// HUD text draws green
const HUD_COLOR: Rgb = Rgb::GREEN;

/// Control-scheme hint echoed at the top of every frame; the bitmap font
/// renders it uppercase.
pub const HINT_TEXT: &str = "Space: Colors  +/-: Speed  Click: Spiral  q: Quit";

/// Emit the primitives for one shape at its current orbital position.
pub fn draw_shape(canvas: &mut dyn Canvas, shape: &Shape) {
    let pos = shape.position();
    let (x, y) = (pos.x as i32, pos.y as i32);
    let s = shape.size;

    canvas.set_color(shape.color);
    match shape.kind {
        ShapeKind::Disc => canvas.draw_circle(x, y, s),
        ShapeKind::Square => {
            canvas.draw_line(x - s, y - s, x + s, y - s);
            canvas.draw_line(x + s, y - s, x + s, y + s);
            canvas.draw_line(x + s, y + s, x - s, y + s);
            canvas.draw_line(x - s, y + s, x - s, y - s);
        }
        ShapeKind::Triangle => {
            canvas.draw_line(x, y - s, x + s, y + s);
            canvas.draw_line(x + s, y + s, x - s, y + s);
            canvas.draw_line(x - s, y + s, x, y - s);
        }
        ShapeKind::Pentagon => {
            for k in 0..5 {
                let a0 = TAU * k as f32 / 5.0;
                let a1 = TAU * (k + 1) as f32 / 5.0;
                let p0 = pos + s as f32 * Vec2::from_angle(a0);
                let p1 = pos + s as f32 * Vec2::from_angle(a1);
                canvas.draw_line(p0.x as i32, p0.y as i32, p1.x as i32, p1.y as i32);
            }
        }
    }
}

/// Lazy dot sequence for a spiral at its current clock value.
///
/// Recomputed from scratch every frame; dot `i` sits at phase
/// `elapsed + 0.1 i` and radius `100 i / 50` from the origin.
pub fn spiral_points(spiral: &SpiralEffect) -> impl Iterator<Item = Vec2> {
    let origin = spiral.origin;
    let elapsed = spiral.elapsed;
    (0..SPIRAL_POINTS).map(move |i| {
        let t = elapsed + i as f32 * SPIRAL_PHASE_STEP;
        let r = SPIRAL_MAX_RADIUS * i as f32 / SPIRAL_POINTS as f32;
        origin + r * Vec2::from_angle(t)
    })
}

/// Draw the spiral overlay as small circles; nothing while inactive.
pub fn draw_spiral(canvas: &mut dyn Canvas, spiral: &SpiralEffect) {
    if !spiral.active {
        return;
    }
    canvas.set_color(SPIRAL_COLOR);
    for p in spiral_points(spiral) {
        canvas.draw_circle(p.x as i32, p.y as i32, SPIRAL_DOT_RADIUS);
    }
}

/// Compose one full frame: background, shapes, spiral, HUD.
pub fn draw_frame(canvas: &mut dyn Canvas, state: &AnimationState, fps: f32) {
    canvas.clear();
    for shape in state.shapes() {
        draw_shape(canvas, shape);
    }
    draw_spiral(canvas, state.spiral());

    canvas.set_color(HUD_COLOR);
    canvas.draw_text(20, 30, HINT_TEXT);
    canvas.draw_text(20, 45, &format!("FPS: {fps:.0}"));
}
