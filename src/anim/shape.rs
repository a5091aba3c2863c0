//! Rotating shape data model

use std::f32::consts::TAU;

use glam::Vec2;

/// Orbit radius of shape 0
const BASE_RADIUS: f32 = 80.0;
/// Orbit radius increase per shape index
const RADIUS_STEP: f32 = 30.0;
/// Angular velocity of shape 0 (radians per frame)
const BASE_VELOCITY: f32 = 0.02;
/// Angular velocity increase per shape index
const VELOCITY_STEP: f32 = 0.005;
/// Half-extent of shape 0 in pixels
const BASE_SIZE: i32 = 15;
/// Half-extent increase per shape index
const SIZE_STEP: i32 = 3;

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    /// Create a color from its three channels
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Rendering geometry of a shape, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Outlined circle
    Disc,
    /// Axis-aligned square outline
    Square,
    /// Isoceles triangle outline
    Triangle,
    /// Regular pentagon outline
    Pentagon,
}

impl ShapeKind {
    /// Kind assigned to a shape index; cycles through all four kinds.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => ShapeKind::Disc,
            1 => ShapeKind::Square,
            2 => ShapeKind::Triangle,
            _ => ShapeKind::Pentagon,
        }
    }
}

/// One shape orbiting the shared center.
///
/// Only `angle` changes every frame; `angular_velocity` changes on speed
/// commands and `color` on the randomize command. Everything else is fixed
/// after creation.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Orbit center, identical across all shapes
    pub center: Vec2,
    /// Orbit radius, distinct per index to give concentric orbits
    pub radius: f32,
    /// Current orbital phase, kept in `[0, 2π)`
    pub angle: f32,
    /// Angle increment applied each frame
    pub angular_velocity: f32,
    /// Half-extent of the drawn geometry in pixels
    pub size: i32,
    /// Current draw color
    pub color: Rgb,
    /// Rendering geometry
    pub kind: ShapeKind,
}

impl Shape {
    /// Deterministic layout for slot `index` out of `count` shapes around
    /// `center`: larger indices orbit farther out, faster, and bigger, with
    /// evenly distributed phase offsets and index-derived colors.
    #[must_use]
    pub fn at_slot(index: usize, count: usize, center: Vec2) -> Self {
        Self {
            center,
            radius: BASE_RADIUS + index as f32 * RADIUS_STEP,
            angle: TAU * index as f32 / count as f32,
            angular_velocity: BASE_VELOCITY + index as f32 * VELOCITY_STEP,
            size: BASE_SIZE + index as i32 * SIZE_STEP,
            color: Rgb::new(
                ((index * 50) % 256) as u8,
                ((index * 80) % 256) as u8,
                ((index * 120) % 256) as u8,
            ),
            kind: ShapeKind::from_index(index),
        }
    }

    /// Current world position on the orbit.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.center + self.radius * Vec2::from_angle(self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cycle_through_all_four() {
        assert_eq!(ShapeKind::from_index(0), ShapeKind::Disc);
        assert_eq!(ShapeKind::from_index(1), ShapeKind::Square);
        assert_eq!(ShapeKind::from_index(2), ShapeKind::Triangle);
        assert_eq!(ShapeKind::from_index(3), ShapeKind::Pentagon);
        assert_eq!(ShapeKind::from_index(4), ShapeKind::Disc);
        assert_eq!(ShapeKind::from_index(7), ShapeKind::Pentagon);
    }

    #[test]
    fn slot_layout_is_deterministic() {
        let center = Vec2::new(400.0, 300.0);
        let shape = Shape::at_slot(3, 8, center);

        assert_eq!(shape.center, center);
        assert_eq!(shape.radius, 170.0);
        assert!((shape.angle - TAU * 3.0 / 8.0).abs() < 1e-6);
        assert!((shape.angular_velocity - 0.035).abs() < 1e-6);
        assert_eq!(shape.size, 24);
        assert_eq!(shape.kind, ShapeKind::Pentagon);
        // 3 * 120 = 360 wraps to 104
        assert_eq!(shape.color, Rgb::new(150, 240, 104));
    }

    #[test]
    fn position_lies_on_the_orbit() {
        let mut shape = Shape::at_slot(0, 8, Vec2::new(100.0, 100.0));
        shape.angle = 0.0;
        let pos = shape.position();
        assert!((pos.x - 180.0).abs() < 1e-4);
        assert!((pos.y - 100.0).abs() < 1e-4);
    }
}
